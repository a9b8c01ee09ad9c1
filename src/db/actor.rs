use crate::db::models::{
    DbCalendar, DbCalendarEvent, DbFinanceEntry, DbFolder, DbMoodEntry, DbNote, DbProfile, DbTask,
    DbUserWidget, DbWidgetType,
};
use crate::db::schema::SQLITE_INIT;
use crate::db::store;
use crate::error::HubError;
use chrono::{DateTime, NaiveDate, Utc};
use lifehub_schema::{
    CalendarCreate, EventCreate, EventPatch, FinanceCreate, FinancePatch, FolderCreate,
    FolderPatch, MoodPatch, MoodUpsert, NotePatch, ProfilePatch, TaskCreate, TaskPatch,
    WidgetCreate, WidgetPatch, WidgetTypeCreate,
};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

type Reply<T> = RpcReplyPort<Result<T, HubError>>;

#[derive(Debug)]
pub enum DbMessage {
    // -- tasks --------------------------------------------------------------
    ListTasks(String, Reply<Vec<DbTask>>),
    CreateTask(String, TaskCreate, Reply<DbTask>),
    UpdateTask(String, i64, TaskPatch, Reply<DbTask>),
    DeleteTask(String, i64, Reply<()>),

    // -- mood entries -------------------------------------------------------
    ListMood(String, Option<(NaiveDate, NaiveDate)>, Reply<Vec<DbMoodEntry>>),
    UpsertMood(String, MoodUpsert, Reply<DbMoodEntry>),
    UpdateMood(String, i64, MoodPatch, Reply<DbMoodEntry>),
    DeleteMood(String, i64, Reply<()>),

    // -- finance entries ----------------------------------------------------
    ListFinance(String, Option<(NaiveDate, NaiveDate)>, Reply<Vec<DbFinanceEntry>>),
    CreateFinance(String, FinanceCreate, Reply<DbFinanceEntry>),
    UpdateFinance(String, i64, FinancePatch, Reply<DbFinanceEntry>),
    DeleteFinance(String, i64, Reply<()>),

    // -- folders ------------------------------------------------------------
    ListFolders(String, Reply<Vec<DbFolder>>),
    FindFolderByName(String, String, Reply<Option<DbFolder>>),
    CreateFolder(String, FolderCreate, Reply<DbFolder>),
    UpdateFolder(String, i64, FolderPatch, Reply<DbFolder>),
    DeleteFolder(String, i64, Reply<()>),

    // -- notes --------------------------------------------------------------
    ListNotes(String, Option<i64>, Reply<Vec<DbNote>>),
    CreateNote(String, Option<i64>, String, String, Reply<DbNote>),
    UpdateNote(String, i64, NotePatch, Reply<DbNote>),
    DeleteNote(String, i64, Reply<()>),

    // -- calendars & events -------------------------------------------------
    ListCalendars(String, Reply<Vec<DbCalendar>>),
    CreateCalendar(String, CalendarCreate, Reply<DbCalendar>),
    ListEvents(String, DateTime<Utc>, DateTime<Utc>, Reply<Vec<DbCalendarEvent>>),
    CreateEvent(String, EventCreate, Reply<DbCalendarEvent>),
    UpdateEvent(String, i64, EventPatch, Reply<DbCalendarEvent>),
    DeleteEvent(String, i64, Reply<()>),

    // -- profile ------------------------------------------------------------
    GetProfile(String, Reply<Option<DbProfile>>),
    UpsertProfile(String, ProfilePatch, Reply<DbProfile>),

    // -- widgets ------------------------------------------------------------
    ListWidgetTypes(Reply<Vec<DbWidgetType>>),
    CreateWidgetType(WidgetTypeCreate, Reply<DbWidgetType>),
    ListWidgets(String, Reply<Vec<DbUserWidget>>),
    CreateWidget(String, WidgetCreate, Reply<DbUserWidget>),
    UpdateWidget(String, i64, WidgetPatch, Reply<DbUserWidget>),
    DeleteWidget(String, i64, Reply<()>),
}

/// Cloneable handle exposing one async method per database operation.
#[derive(Clone)]
pub struct DbHandle {
    actor: ActorRef<DbMessage>,
}

macro_rules! rpc {
    ($self:ident, $variant:ident $(, $arg:expr)*) => {
        ractor::call!($self.actor, DbMessage::$variant $(, $arg)*)
            .map_err(|e| HubError::Actor(format!(concat!(stringify!($variant), " RPC failed: {}"), e)))?
    };
}

impl DbHandle {
    pub async fn list_tasks(&self, user_id: &str) -> Result<Vec<DbTask>, HubError> {
        rpc!(self, ListTasks, user_id.to_string())
    }

    pub async fn create_task(&self, user_id: &str, create: TaskCreate) -> Result<DbTask, HubError> {
        rpc!(self, CreateTask, user_id.to_string(), create)
    }

    pub async fn update_task(
        &self,
        user_id: &str,
        id: i64,
        patch: TaskPatch,
    ) -> Result<DbTask, HubError> {
        rpc!(self, UpdateTask, user_id.to_string(), id, patch)
    }

    pub async fn delete_task(&self, user_id: &str, id: i64) -> Result<(), HubError> {
        rpc!(self, DeleteTask, user_id.to_string(), id)
    }

    pub async fn list_mood(
        &self,
        user_id: &str,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<DbMoodEntry>, HubError> {
        rpc!(self, ListMood, user_id.to_string(), range)
    }

    pub async fn upsert_mood(
        &self,
        user_id: &str,
        upsert: MoodUpsert,
    ) -> Result<DbMoodEntry, HubError> {
        rpc!(self, UpsertMood, user_id.to_string(), upsert)
    }

    pub async fn update_mood(
        &self,
        user_id: &str,
        id: i64,
        patch: MoodPatch,
    ) -> Result<DbMoodEntry, HubError> {
        rpc!(self, UpdateMood, user_id.to_string(), id, patch)
    }

    pub async fn delete_mood(&self, user_id: &str, id: i64) -> Result<(), HubError> {
        rpc!(self, DeleteMood, user_id.to_string(), id)
    }

    pub async fn list_finance(
        &self,
        user_id: &str,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<DbFinanceEntry>, HubError> {
        rpc!(self, ListFinance, user_id.to_string(), range)
    }

    pub async fn create_finance(
        &self,
        user_id: &str,
        create: FinanceCreate,
    ) -> Result<DbFinanceEntry, HubError> {
        rpc!(self, CreateFinance, user_id.to_string(), create)
    }

    pub async fn update_finance(
        &self,
        user_id: &str,
        id: i64,
        patch: FinancePatch,
    ) -> Result<DbFinanceEntry, HubError> {
        rpc!(self, UpdateFinance, user_id.to_string(), id, patch)
    }

    pub async fn delete_finance(&self, user_id: &str, id: i64) -> Result<(), HubError> {
        rpc!(self, DeleteFinance, user_id.to_string(), id)
    }

    pub async fn list_folders(&self, user_id: &str) -> Result<Vec<DbFolder>, HubError> {
        rpc!(self, ListFolders, user_id.to_string())
    }

    pub async fn find_folder_by_name(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Option<DbFolder>, HubError> {
        rpc!(self, FindFolderByName, user_id.to_string(), name.to_string())
    }

    pub async fn create_folder(
        &self,
        user_id: &str,
        create: FolderCreate,
    ) -> Result<DbFolder, HubError> {
        rpc!(self, CreateFolder, user_id.to_string(), create)
    }

    pub async fn update_folder(
        &self,
        user_id: &str,
        id: i64,
        patch: FolderPatch,
    ) -> Result<DbFolder, HubError> {
        rpc!(self, UpdateFolder, user_id.to_string(), id, patch)
    }

    pub async fn delete_folder(&self, user_id: &str, id: i64) -> Result<(), HubError> {
        rpc!(self, DeleteFolder, user_id.to_string(), id)
    }

    pub async fn list_notes(
        &self,
        user_id: &str,
        folder_id: Option<i64>,
    ) -> Result<Vec<DbNote>, HubError> {
        rpc!(self, ListNotes, user_id.to_string(), folder_id)
    }

    pub async fn create_note(
        &self,
        user_id: &str,
        folder_id: Option<i64>,
        title: &str,
        content: &str,
    ) -> Result<DbNote, HubError> {
        rpc!(
            self,
            CreateNote,
            user_id.to_string(),
            folder_id,
            title.to_string(),
            content.to_string()
        )
    }

    pub async fn update_note(
        &self,
        user_id: &str,
        id: i64,
        patch: NotePatch,
    ) -> Result<DbNote, HubError> {
        rpc!(self, UpdateNote, user_id.to_string(), id, patch)
    }

    pub async fn delete_note(&self, user_id: &str, id: i64) -> Result<(), HubError> {
        rpc!(self, DeleteNote, user_id.to_string(), id)
    }

    pub async fn list_calendars(&self, user_id: &str) -> Result<Vec<DbCalendar>, HubError> {
        rpc!(self, ListCalendars, user_id.to_string())
    }

    pub async fn create_calendar(
        &self,
        user_id: &str,
        create: CalendarCreate,
    ) -> Result<DbCalendar, HubError> {
        rpc!(self, CreateCalendar, user_id.to_string(), create)
    }

    pub async fn list_events(
        &self,
        user_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DbCalendarEvent>, HubError> {
        rpc!(self, ListEvents, user_id.to_string(), from, to)
    }

    pub async fn create_event(
        &self,
        user_id: &str,
        create: EventCreate,
    ) -> Result<DbCalendarEvent, HubError> {
        rpc!(self, CreateEvent, user_id.to_string(), create)
    }

    pub async fn update_event(
        &self,
        user_id: &str,
        id: i64,
        patch: EventPatch,
    ) -> Result<DbCalendarEvent, HubError> {
        rpc!(self, UpdateEvent, user_id.to_string(), id, patch)
    }

    pub async fn delete_event(&self, user_id: &str, id: i64) -> Result<(), HubError> {
        rpc!(self, DeleteEvent, user_id.to_string(), id)
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<DbProfile>, HubError> {
        rpc!(self, GetProfile, user_id.to_string())
    }

    pub async fn upsert_profile(
        &self,
        user_id: &str,
        patch: ProfilePatch,
    ) -> Result<DbProfile, HubError> {
        rpc!(self, UpsertProfile, user_id.to_string(), patch)
    }

    pub async fn list_widget_types(&self) -> Result<Vec<DbWidgetType>, HubError> {
        rpc!(self, ListWidgetTypes)
    }

    pub async fn create_widget_type(
        &self,
        create: WidgetTypeCreate,
    ) -> Result<DbWidgetType, HubError> {
        rpc!(self, CreateWidgetType, create)
    }

    pub async fn list_widgets(&self, user_id: &str) -> Result<Vec<DbUserWidget>, HubError> {
        rpc!(self, ListWidgets, user_id.to_string())
    }

    pub async fn create_widget(
        &self,
        user_id: &str,
        create: WidgetCreate,
    ) -> Result<DbUserWidget, HubError> {
        rpc!(self, CreateWidget, user_id.to_string(), create)
    }

    pub async fn update_widget(
        &self,
        user_id: &str,
        id: i64,
        patch: WidgetPatch,
    ) -> Result<DbUserWidget, HubError> {
        rpc!(self, UpdateWidget, user_id.to_string(), id, patch)
    }

    pub async fn delete_widget(&self, user_id: &str, id: i64) -> Result<(), HubError> {
        rpc!(self, DeleteWidget, user_id.to_string(), id)
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        let pool = &state.pool;
        match message {
            DbMessage::ListTasks(user, reply) => {
                let _ = reply.send(store::tasks::list(pool, &user).await);
            }
            DbMessage::CreateTask(user, create, reply) => {
                let _ = reply.send(store::tasks::create(pool, &user, &create).await);
            }
            DbMessage::UpdateTask(user, id, patch, reply) => {
                let _ = reply.send(store::tasks::update(pool, &user, id, &patch).await);
            }
            DbMessage::DeleteTask(user, id, reply) => {
                let _ = reply.send(store::tasks::delete(pool, &user, id).await);
            }

            DbMessage::ListMood(user, range, reply) => {
                let _ = reply.send(store::mood::list(pool, &user, range).await);
            }
            DbMessage::UpsertMood(user, upsert, reply) => {
                let _ = reply.send(store::mood::upsert(pool, &user, &upsert).await);
            }
            DbMessage::UpdateMood(user, id, patch, reply) => {
                let _ = reply.send(store::mood::update(pool, &user, id, &patch).await);
            }
            DbMessage::DeleteMood(user, id, reply) => {
                let _ = reply.send(store::mood::delete(pool, &user, id).await);
            }

            DbMessage::ListFinance(user, range, reply) => {
                let _ = reply.send(store::finance::list(pool, &user, range).await);
            }
            DbMessage::CreateFinance(user, create, reply) => {
                let _ = reply.send(store::finance::create(pool, &user, &create).await);
            }
            DbMessage::UpdateFinance(user, id, patch, reply) => {
                let _ = reply.send(store::finance::update(pool, &user, id, &patch).await);
            }
            DbMessage::DeleteFinance(user, id, reply) => {
                let _ = reply.send(store::finance::delete(pool, &user, id).await);
            }

            DbMessage::ListFolders(user, reply) => {
                let _ = reply.send(store::folders::list(pool, &user).await);
            }
            DbMessage::FindFolderByName(user, name, reply) => {
                let _ = reply.send(store::folders::find_by_name(pool, &user, &name).await);
            }
            DbMessage::CreateFolder(user, create, reply) => {
                let _ = reply.send(store::folders::create(pool, &user, &create).await);
            }
            DbMessage::UpdateFolder(user, id, patch, reply) => {
                let _ = reply.send(store::folders::update(pool, &user, id, &patch).await);
            }
            DbMessage::DeleteFolder(user, id, reply) => {
                let _ = reply.send(store::folders::delete(pool, &user, id).await);
            }

            DbMessage::ListNotes(user, folder, reply) => {
                let _ = reply.send(store::notes::list(pool, &user, folder).await);
            }
            DbMessage::CreateNote(user, folder, title, content, reply) => {
                let _ =
                    reply.send(store::notes::create(pool, &user, folder, &title, &content).await);
            }
            DbMessage::UpdateNote(user, id, patch, reply) => {
                let _ = reply.send(store::notes::update(pool, &user, id, &patch).await);
            }
            DbMessage::DeleteNote(user, id, reply) => {
                let _ = reply.send(store::notes::delete(pool, &user, id).await);
            }

            DbMessage::ListCalendars(user, reply) => {
                let _ = reply.send(store::calendar::list_calendars(pool, &user).await);
            }
            DbMessage::CreateCalendar(user, create, reply) => {
                let _ = reply.send(store::calendar::create_calendar(pool, &user, &create).await);
            }
            DbMessage::ListEvents(user, from, to, reply) => {
                let _ = reply.send(store::calendar::list_events(pool, &user, from, to).await);
            }
            DbMessage::CreateEvent(user, create, reply) => {
                let _ = reply.send(store::calendar::create_event(pool, &user, &create).await);
            }
            DbMessage::UpdateEvent(user, id, patch, reply) => {
                let _ = reply.send(store::calendar::update_event(pool, &user, id, &patch).await);
            }
            DbMessage::DeleteEvent(user, id, reply) => {
                let _ = reply.send(store::calendar::delete_event(pool, &user, id).await);
            }

            DbMessage::GetProfile(user, reply) => {
                let _ = reply.send(store::profile::get(pool, &user).await);
            }
            DbMessage::UpsertProfile(user, patch, reply) => {
                let _ = reply.send(store::profile::upsert(pool, &user, &patch).await);
            }

            DbMessage::ListWidgetTypes(reply) => {
                let _ = reply.send(store::widgets::list_types(pool).await);
            }
            DbMessage::CreateWidgetType(create, reply) => {
                let _ = reply.send(store::widgets::create_type(pool, &create).await);
            }
            DbMessage::ListWidgets(user, reply) => {
                let _ = reply.send(store::widgets::list(pool, &user).await);
            }
            DbMessage::CreateWidget(user, create, reply) => {
                let _ = reply.send(store::widgets::create(pool, &user, &create).await);
            }
            DbMessage::UpdateWidget(user, id, patch, reply) => {
                let _ = reply.send(store::widgets::update(pool, &user, id, &patch).await);
            }
            DbMessage::DeleteWidget(user, id, reply) => {
                let _ = reply.send(store::widgets::delete(pool, &user, id).await);
            }
        }
        Ok(())
    }
}

/// Spawn the database actor and return a cloneable handle. The registered
/// name embeds the database URL so several actors (tests) can coexist.
pub async fn spawn(database_url: &str) -> DbHandle {
    let (actor, _jh) = ractor::Actor::spawn(
        Some(format!("DbActor:{database_url}")),
        DbActor,
        database_url.to_string(),
    )
    .await
    .expect("failed to spawn DbActor");

    DbHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), HubError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
