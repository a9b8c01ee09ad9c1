//! SQL DDL for initializing the database schema.
//! SQLite-first design; every user-owned table carries a `user_id` column and
//! every statement in the stores filters on it.

/// SQLite schema: one table per resource plus the widget catalog, seeded with
/// the built-in widget types.
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Tasks
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NULL,
    due_date TEXT NULL, -- ISO date
    priority TEXT NOT NULL DEFAULT 'medium',
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_tasks_user ON tasks(user_id);

-- ---------------------------------------------------------------------------
-- Mood entries (one per user per day)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS mood_entries (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    entry_date TEXT NOT NULL, -- ISO date
    mood_score INTEGER NOT NULL,
    note TEXT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL, -- RFC3339
    UNIQUE(user_id, entry_date)
);

CREATE INDEX IF NOT EXISTS idx_mood_user_date ON mood_entries(user_id, entry_date);

-- ---------------------------------------------------------------------------
-- Finance entries
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS finance_entries (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    entry_type TEXT NOT NULL, -- income | expense | transfer
    amount REAL NOT NULL,
    category TEXT NULL,
    description TEXT NULL,
    entry_date TEXT NOT NULL, -- ISO date
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_finance_user_date ON finance_entries(user_id, entry_date);

-- ---------------------------------------------------------------------------
-- Folders (note containers)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS folders (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    is_default INTEGER NOT NULL DEFAULT 0,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL, -- RFC3339
    UNIQUE(user_id, name)
);

CREATE INDEX IF NOT EXISTS idx_folders_user ON folders(user_id);

-- ---------------------------------------------------------------------------
-- Notes (at most one folder each)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    folder_id INTEGER NULL REFERENCES folders(id) ON DELETE SET NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_notes_user ON notes(user_id);
CREATE INDEX IF NOT EXISTS idx_notes_folder ON notes(folder_id);

-- ---------------------------------------------------------------------------
-- Calendars (one default per user)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS calendars (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    color TEXT NULL,
    is_default INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_calendars_user ON calendars(user_id);

-- ---------------------------------------------------------------------------
-- Calendar events (multi-day = start/end difference, no recurrence)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS calendar_events (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    calendar_id INTEGER NOT NULL REFERENCES calendars(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    description TEXT NULL,
    location TEXT NULL,
    starts_at TEXT NOT NULL, -- RFC3339
    ends_at TEXT NOT NULL,   -- RFC3339
    is_all_day INTEGER NOT NULL DEFAULT 0,
    color TEXT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_events_user_start ON calendar_events(user_id, starts_at);
CREATE INDEX IF NOT EXISTS idx_events_calendar ON calendar_events(calendar_id);

-- ---------------------------------------------------------------------------
-- Profiles (1:1 with the auth user, free-form JSON blobs)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS profiles (
    user_id TEXT PRIMARY KEY NOT NULL,
    display_name TEXT NULL,
    timezone TEXT NULL,
    preferences TEXT NOT NULL DEFAULT '{}',
    social_links TEXT NOT NULL DEFAULT '{}',
    notification_settings TEXT NOT NULL DEFAULT '{}',
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL  -- RFC3339
);

-- ---------------------------------------------------------------------------
-- Widget catalog + per-user instances (one per type, 20 per user)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS widget_types (
    id INTEGER PRIMARY KEY NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT NULL,
    default_config TEXT NOT NULL DEFAULT '{}',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS user_widgets (
    id INTEGER PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    widget_type_id INTEGER NOT NULL REFERENCES widget_types(id),
    position INTEGER NOT NULL DEFAULT 0,
    width INTEGER NOT NULL DEFAULT 1,
    height INTEGER NOT NULL DEFAULT 1,
    config TEXT NOT NULL DEFAULT '{}',
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL, -- RFC3339
    UNIQUE(user_id, widget_type_id)
);

CREATE INDEX IF NOT EXISTS idx_user_widgets_user ON user_widgets(user_id);

INSERT OR IGNORE INTO widget_types (slug, name, description, default_config, created_at) VALUES
    ('tasks_overview', 'Tasks overview', 'Open tasks due soon', '{"limit":5}', '2025-01-01 00:00:00+00:00'),
    ('mood_tracker', 'Mood tracker', 'Daily mood check-in and trend', '{"days":14}', '2025-01-01 00:00:00+00:00'),
    ('finance_summary', 'Finance summary', 'Income and spending for the period', '{"days":30}', '2025-01-01 00:00:00+00:00'),
    ('weather_now', 'Weather', 'Current conditions for a saved location', '{}', '2025-01-01 00:00:00+00:00'),
    ('notes_quick', 'Quick notes', 'Most recently edited notes', '{"limit":3}', '2025-01-01 00:00:00+00:00'),
    ('calendar_agenda', 'Agenda', 'Upcoming calendar events', '{"days":7}', '2025-01-01 00:00:00+00:00');
"#;
