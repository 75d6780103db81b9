//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the migrations exactly; regenerate with
//! `diesel print-schema` after a migration changes the schema.

diesel::table! {
    /// User accounts.
    ///
    /// `name` carries a unique index; conflict detection on insert and
    /// update is what upholds the unique-name invariant under concurrent
    /// writers.
    users (id) {
        /// Primary key: UUID v4 assigned by the service.
        id -> Uuid,
        /// Unique user name, case-sensitive.
        name -> Varchar,
        /// Record creation timestamp; also the page ordering key.
        created_at -> Timestamptz,
        /// Refreshed whenever the record is renamed.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records. Declared for the schema only: no operation exposes
    /// tasks yet.
    tasks (id) {
        /// Primary key: UUID v4.
        id -> Uuid,
        /// Short task title.
        title -> Varchar,
        /// Free-form description.
        description -> Nullable<Text>,
        /// Date the task becomes active.
        start_date -> Nullable<Date>,
        /// Date the task is due.
        deadline -> Nullable<Date>,
        /// Date the task repeats.
        repeat_date -> Nullable<Date>,
        /// Task priority label.
        priority -> Varchar,
    }
}

diesel::table! {
    /// Assignment of users to tasks. Unused until tasks are exposed.
    tasks_users (task_id, user_id) {
        /// The assigned task.
        task_id -> Uuid,
        /// The assignee.
        user_id -> Uuid,
    }
}

diesel::joinable!(tasks_users -> tasks (task_id));
diesel::joinable!(tasks_users -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, tasks, tasks_users);
