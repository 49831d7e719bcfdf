pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod sync;


pub use api::{
    admin::{
        admin::{sync_backlog_handler, sync_fields_handler, sync_labels_handler},
        custom_field_dto::{CustomFieldDto, CustomFieldValueDto},
        label_dto::LabelDto,
        sync_response::SyncResponse,
    },
    backlog::{
        backlog::list_backlog, backlog_response::BacklogResponse,
        list_backlog_query::ListBacklogQuery,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::db_conn::DbConn,
    references::{
        reference_dto::ReferenceDto,
        reference_request::ReferenceRequest,
        references::{
            create_reference, delete_reference, get_reference, list_references,
            reference_routes, update_reference,
        },
    },
    resolve::{
        ensure_story_exists, parse_association, parse_id, require_reference, require_story,
    },
    stories::{
        stories::{attach_to_story, detach_from_story, get_story},
        story_dto::StoryDto,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
