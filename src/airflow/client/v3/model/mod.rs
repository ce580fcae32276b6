//! Data transfer objects of the Airflow 3.x REST API (`/api/v2`).
//!
//! Keys the schema marks required but nullable are `Option`; keys it may omit are
//! [`Maybe`](crate::airflow::model::Maybe).

pub mod asset;
pub mod backfill;
pub mod connection;
pub mod dag;
pub mod dagrun;
pub mod error;
pub mod eventlog;
pub mod importerror;
pub mod monitoring;
pub mod pool;
pub mod task;
pub mod taskinstance;
pub mod variable;
pub mod xcom;

pub use error::ApiError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airflow::model::assert_round_trip;
    use rstest::rstest;

    #[rstest]
    #[case::dag_schedule_asset_reference(assert_round_trip::<asset::DagScheduleAssetReference>, r#"{"x_extra": "kept", "dag_id": "s", "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z"}"#)]
    #[case::task_outlet_asset_reference(assert_round_trip::<asset::TaskOutletAssetReference>, r#"{"x_extra": "kept", "dag_id": "s", "task_id": "s", "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z"}"#)]
    #[case::asset_alias_response(assert_round_trip::<asset::AssetAliasResponse>, r#"{"x_extra": "kept", "id": 7, "name": "s", "group": "s"}"#)]
    #[case::asset_response(assert_round_trip::<asset::AssetResponse>, r#"{"x_extra": "kept", "id": 7, "name": "s", "uri": "s", "group": "s", "extra": {"k": [1, "two"]}, "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z", "scheduled_dags": [{"x_extra": "kept", "dag_id": "s", "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z"}], "producing_tasks": [{"x_extra": "kept", "dag_id": "s", "task_id": "s", "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z"}], "aliases": [{"x_extra": "kept", "id": 7, "name": "s", "group": "s"}]}"#)]
    #[case::asset_collection_response(assert_round_trip::<asset::AssetCollectionResponse>, r#"{"x_extra": "kept", "assets": [{"x_extra": "kept", "id": 7, "name": "s", "uri": "s", "group": "s", "extra": {"k": [1, "two"]}, "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z", "scheduled_dags": [{"x_extra": "kept", "dag_id": "s", "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z"}], "producing_tasks": [{"x_extra": "kept", "dag_id": "s", "task_id": "s", "created_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z"}], "aliases": [{"x_extra": "kept", "id": 7, "name": "s", "group": "s"}]}], "total_entries": 7}"#)]
    #[case::dag_run_asset_reference(assert_round_trip::<asset::DagRunAssetReference>, r#"{"x_extra": "kept", "run_id": "s", "dag_id": "s", "logical_date": "2025-01-02T03:04:05Z", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "state": "s", "data_interval_start": "2025-01-02T03:04:05Z", "data_interval_end": "2025-01-02T03:04:05Z"}"#)]
    #[case::asset_event_response(assert_round_trip::<asset::AssetEventResponse>, r#"{"x_extra": "kept", "id": 7, "asset_id": 7, "uri": "s", "name": "s", "group": "s", "extra": {"k": [1, "two"]}, "source_task_id": "s", "source_dag_id": "s", "source_run_id": "s", "source_map_index": 7, "created_dagruns": [{"x_extra": "kept", "run_id": "s", "dag_id": "s", "logical_date": "2025-01-02T03:04:05Z", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "state": "s", "data_interval_start": "2025-01-02T03:04:05Z", "data_interval_end": "2025-01-02T03:04:05Z"}], "timestamp": "2025-01-02T03:04:05Z"}"#)]
    #[case::asset_event_collection_response(assert_round_trip::<asset::AssetEventCollectionResponse>, r#"{"x_extra": "kept", "asset_events": [{"x_extra": "kept", "id": 7, "asset_id": 7, "uri": "s", "name": "s", "group": "s", "extra": {"k": [1, "two"]}, "source_task_id": "s", "source_dag_id": "s", "source_run_id": "s", "source_map_index": 7, "created_dagruns": [{"x_extra": "kept", "run_id": "s", "dag_id": "s", "logical_date": "2025-01-02T03:04:05Z", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "state": "s", "data_interval_start": "2025-01-02T03:04:05Z", "data_interval_end": "2025-01-02T03:04:05Z"}], "timestamp": "2025-01-02T03:04:05Z"}], "total_entries": 7}"#)]
    #[case::create_asset_events_body(assert_round_trip::<asset::CreateAssetEventsBody>, r#"{"x_extra": "kept", "asset_id": 7, "extra": {"k": [1, "two"]}}"#)]
    #[case::backfill_response(assert_round_trip::<backfill::BackfillResponse>, r#"{"x_extra": "kept", "id": 7, "dag_id": "s", "from_date": "2025-01-02T03:04:05Z", "to_date": "2025-01-02T03:04:05Z", "dag_run_conf": {"k": [1, "two"]}, "is_paused": true, "reprocess_behavior": "failed", "max_active_runs": 7, "created_at": "2025-01-02T03:04:05Z", "completed_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z", "dag_display_name": "s"}"#)]
    #[case::backfill_collection_response(assert_round_trip::<backfill::BackfillCollectionResponse>, r#"{"x_extra": "kept", "backfills": [{"x_extra": "kept", "id": 7, "dag_id": "s", "from_date": "2025-01-02T03:04:05Z", "to_date": "2025-01-02T03:04:05Z", "dag_run_conf": {"k": [1, "two"]}, "is_paused": true, "reprocess_behavior": "failed", "max_active_runs": 7, "created_at": "2025-01-02T03:04:05Z", "completed_at": "2025-01-02T03:04:05Z", "updated_at": "2025-01-02T03:04:05Z", "dag_display_name": "s"}], "total_entries": 7}"#)]
    #[case::backfill_post_body(assert_round_trip::<backfill::BackfillPostBody>, r#"{"x_extra": "kept", "dag_id": "s", "from_date": "2025-01-02T03:04:05Z", "to_date": "2025-01-02T03:04:05Z", "run_backwards": true, "dag_run_conf": {"k": [1, "two"]}, "reprocess_behavior": "failed", "max_active_runs": 7}"#)]
    #[case::dry_run_backfill_response(assert_round_trip::<backfill::DryRunBackfillResponse>, r#"{"x_extra": "kept", "logical_date": "2025-01-02T03:04:05Z"}"#)]
    #[case::dry_run_backfill_collection_response(assert_round_trip::<backfill::DryRunBackfillCollectionResponse>, r#"{"x_extra": "kept", "backfills": [{"x_extra": "kept", "logical_date": "2025-01-02T03:04:05Z"}], "total_entries": 7}"#)]
    #[case::connection_response(assert_round_trip::<connection::ConnectionResponse>, r#"{"x_extra": "kept", "connection_id": "s", "conn_type": "s", "description": "s", "host": "s", "login": "s", "schema": "s", "port": 7, "password": "s", "extra": "s"}"#)]
    #[case::connection_collection_response(assert_round_trip::<connection::ConnectionCollectionResponse>, r#"{"x_extra": "kept", "connections": [{"x_extra": "kept", "connection_id": "s", "conn_type": "s", "description": "s", "host": "s", "login": "s", "schema": "s", "port": 7, "password": "s", "extra": "s"}], "total_entries": 7}"#)]
    #[case::connection_body(assert_round_trip::<connection::ConnectionBody>, r#"{"x_extra": "kept", "connection_id": "s", "conn_type": "s", "description": "s", "host": "s", "login": "s", "schema": "s", "port": 7, "password": "s", "extra": "s"}"#)]
    #[case::connection_test_response(assert_round_trip::<connection::ConnectionTestResponse>, r#"{"x_extra": "kept", "status": true, "message": "s"}"#)]
    #[case::dag_tag_response(assert_round_trip::<dag::DagTagResponse>, r#"{"x_extra": "kept", "name": "s", "dag_id": "s"}"#)]
    #[case::dag_response(assert_round_trip::<dag::DagResponse>, r#"{"x_extra": "kept", "dag_id": "s", "dag_display_name": "s", "is_paused": true, "is_stale": true, "last_parsed_time": "2025-01-02T03:04:05Z", "last_expired": "2025-01-02T03:04:05Z", "bundle_name": "s", "bundle_version": "s", "relative_fileloc": "s", "fileloc": "s", "description": "s", "timetable_summary": "s", "timetable_description": "s", "tags": [{"x_extra": "kept", "name": "s", "dag_id": "s"}], "max_active_tasks": 7, "max_active_runs": 7, "max_consecutive_failed_dag_runs": 7, "has_task_concurrency_limits": true, "has_import_errors": true, "next_dagrun_logical_date": "2025-01-02T03:04:05Z", "next_dagrun_data_interval_start": "2025-01-02T03:04:05Z", "next_dagrun_data_interval_end": "2025-01-02T03:04:05Z", "next_dagrun_run_after": "2025-01-02T03:04:05Z", "owners": ["s"], "file_token": "s"}"#)]
    #[case::dag_collection_response(assert_round_trip::<dag::DagCollectionResponse>, r#"{"x_extra": "kept", "dags": [{"x_extra": "kept", "dag_id": "s", "dag_display_name": "s", "is_paused": true, "is_stale": true, "last_parsed_time": "2025-01-02T03:04:05Z", "last_expired": "2025-01-02T03:04:05Z", "bundle_name": "s", "bundle_version": "s", "relative_fileloc": "s", "fileloc": "s", "description": "s", "timetable_summary": "s", "timetable_description": "s", "tags": [{"x_extra": "kept", "name": "s", "dag_id": "s"}], "max_active_tasks": 7, "max_active_runs": 7, "max_consecutive_failed_dag_runs": 7, "has_task_concurrency_limits": true, "has_import_errors": true, "next_dagrun_logical_date": "2025-01-02T03:04:05Z", "next_dagrun_data_interval_start": "2025-01-02T03:04:05Z", "next_dagrun_data_interval_end": "2025-01-02T03:04:05Z", "next_dagrun_run_after": "2025-01-02T03:04:05Z", "owners": ["s"], "file_token": "s"}], "total_entries": 7}"#)]
    #[case::dag_details_response(assert_round_trip::<dag::DagDetailsResponse>, r#"{"x_extra": "kept", "dag_id": "s", "dag_display_name": "s", "is_paused": true, "is_stale": true, "last_parsed_time": "2025-01-02T03:04:05Z", "last_expired": "2025-01-02T03:04:05Z", "bundle_name": "s", "bundle_version": "s", "relative_fileloc": "s", "fileloc": "s", "description": "s", "timetable_summary": "s", "timetable_description": "s", "tags": [{"x_extra": "kept", "name": "s", "dag_id": "s"}], "max_active_tasks": 7, "max_active_runs": 7, "max_consecutive_failed_dag_runs": 7, "has_task_concurrency_limits": true, "has_import_errors": true, "next_dagrun_logical_date": "2025-01-02T03:04:05Z", "next_dagrun_data_interval_start": "2025-01-02T03:04:05Z", "next_dagrun_data_interval_end": "2025-01-02T03:04:05Z", "next_dagrun_run_after": "2025-01-02T03:04:05Z", "owners": ["s"], "file_token": "s", "catchup": true, "dag_run_timeout": "s", "asset_expression": {"k": [1, "two"]}, "doc_md": "s", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "is_paused_upon_creation": true, "params": {"k": [1, "two"]}, "render_template_as_native_obj": true, "template_search_path": ["s"], "timezone": "s", "last_parsed": "2025-01-02T03:04:05Z", "default_args": {"k": [1, "two"]}, "owner_links": {"docs": "https://example.com"}, "concurrency": 7, "latest_dag_version": null}"#)]
    #[case::dag_patch_body(assert_round_trip::<dag::DagPatchBody>, r#"{"x_extra": "kept", "is_paused": true}"#)]
    #[case::dag_tag_collection_response(assert_round_trip::<dag::DagTagCollectionResponse>, r#"{"x_extra": "kept", "tags": ["s"], "total_entries": 7}"#)]
    #[case::dag_source_response(assert_round_trip::<dag::DagSourceResponse>, r#"{"x_extra": "kept", "content": "s", "dag_id": "s", "version_number": 7, "dag_display_name": "s"}"#)]
    #[case::dag_version_response(assert_round_trip::<dagrun::DagVersionResponse>, r#"{"x_extra": "kept", "id": "s", "version_number": 7, "dag_id": "s", "bundle_name": "s", "bundle_version": "s", "created_at": "2025-01-02T03:04:05Z", "bundle_url": "s", "dag_display_name": "s"}"#)]
    #[case::dag_run_response(assert_round_trip::<dagrun::DagRunResponse>, r#"{"x_extra": "kept", "dag_run_id": "s", "dag_id": "s", "logical_date": "2025-01-02T03:04:05Z", "queued_at": "2025-01-02T03:04:05Z", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "data_interval_start": "2025-01-02T03:04:05Z", "data_interval_end": "2025-01-02T03:04:05Z", "run_after": "2025-01-02T03:04:05Z", "last_scheduling_decision": "2025-01-02T03:04:05Z", "run_type": "backfill", "state": "queued", "triggered_by": "cli", "conf": {"k": [1, "two"]}, "note": "s", "dag_versions": [{"x_extra": "kept", "id": "s", "version_number": 7, "dag_id": "s", "bundle_name": "s", "bundle_version": "s", "created_at": "2025-01-02T03:04:05Z", "bundle_url": "s", "dag_display_name": "s"}], "bundle_version": "s", "dag_display_name": "s"}"#)]
    #[case::dag_run_collection_response(assert_round_trip::<dagrun::DagRunCollectionResponse>, r#"{"x_extra": "kept", "dag_runs": [{"x_extra": "kept", "dag_run_id": "s", "dag_id": "s", "logical_date": "2025-01-02T03:04:05Z", "queued_at": "2025-01-02T03:04:05Z", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "data_interval_start": "2025-01-02T03:04:05Z", "data_interval_end": "2025-01-02T03:04:05Z", "run_after": "2025-01-02T03:04:05Z", "last_scheduling_decision": "2025-01-02T03:04:05Z", "run_type": "backfill", "state": "queued", "triggered_by": "cli", "conf": {"k": [1, "two"]}, "note": "s", "dag_versions": [{"x_extra": "kept", "id": "s", "version_number": 7, "dag_id": "s", "bundle_name": "s", "bundle_version": "s", "created_at": "2025-01-02T03:04:05Z", "bundle_url": "s", "dag_display_name": "s"}], "bundle_version": "s", "dag_display_name": "s"}], "total_entries": 7}"#)]
    #[case::dag_runs_batch_body(assert_round_trip::<dagrun::DagRunsBatchBody>, r#"{"x_extra": "kept", "order_by": "s", "page_offset": 7, "page_limit": 7, "dag_ids": ["s"], "states": ["queued"], "run_after_gte": "2025-01-02T03:04:05Z", "run_after_lte": "2025-01-02T03:04:05Z", "logical_date_gte": "2025-01-02T03:04:05Z", "logical_date_lte": "2025-01-02T03:04:05Z", "start_date_gte": "2025-01-02T03:04:05Z", "start_date_lte": "2025-01-02T03:04:05Z", "end_date_gte": "2025-01-02T03:04:05Z", "end_date_lte": "2025-01-02T03:04:05Z"}"#)]
    #[case::trigger_dag_run_post_body(assert_round_trip::<dagrun::TriggerDagRunPostBody>, r#"{"x_extra": "kept", "dag_run_id": "s", "data_interval_start": "2025-01-02T03:04:05Z", "data_interval_end": "2025-01-02T03:04:05Z", "logical_date": "2025-01-02T03:04:05Z", "run_after": "2025-01-02T03:04:05Z", "conf": {"k": [1, "two"]}, "note": "s"}"#)]
    #[case::dag_run_patch_body(assert_round_trip::<dagrun::DagRunPatchBody>, r#"{"x_extra": "kept", "state": "queued", "note": "s"}"#)]
    #[case::dag_run_clear_body(assert_round_trip::<dagrun::DagRunClearBody>, r#"{"x_extra": "kept", "dry_run": true, "only_failed": true}"#)]
    #[case::http_exception_response(assert_round_trip::<error::HttpExceptionResponse>, r#"{"x_extra": "kept", "detail": "Not found"}"#)]
    #[case::validation_error(assert_round_trip::<error::ValidationError>, r#"{"x_extra": "kept", "loc": ["body", 0], "msg": "s", "type": "s"}"#)]
    #[case::http_validation_error(assert_round_trip::<error::HttpValidationError>, r#"{"x_extra": "kept", "detail": null}"#)]
    #[case::event_log_response(assert_round_trip::<eventlog::EventLogResponse>, r#"{"x_extra": "kept", "event_log_id": 7, "when": "2025-01-02T03:04:05Z", "dag_id": "s", "task_id": "s", "run_id": "s", "map_index": 7, "try_number": 7, "event": "s", "logical_date": "2025-01-02T03:04:05Z", "owner": "s", "extra": "s", "dag_display_name": "s"}"#)]
    #[case::event_log_collection_response(assert_round_trip::<eventlog::EventLogCollectionResponse>, r#"{"x_extra": "kept", "event_logs": [{"x_extra": "kept", "event_log_id": 7, "when": "2025-01-02T03:04:05Z", "dag_id": "s", "task_id": "s", "run_id": "s", "map_index": 7, "try_number": 7, "event": "s", "logical_date": "2025-01-02T03:04:05Z", "owner": "s", "extra": "s", "dag_display_name": "s"}], "total_entries": 7}"#)]
    #[case::import_error_response(assert_round_trip::<importerror::ImportErrorResponse>, r#"{"x_extra": "kept", "import_error_id": 7, "timestamp": "2025-01-02T03:04:05Z", "filename": "s", "bundle_name": "s", "stack_trace": "s"}"#)]
    #[case::import_error_collection_response(assert_round_trip::<importerror::ImportErrorCollectionResponse>, r#"{"x_extra": "kept", "import_errors": [{"x_extra": "kept", "import_error_id": 7, "timestamp": "2025-01-02T03:04:05Z", "filename": "s", "bundle_name": "s", "stack_trace": "s"}], "total_entries": 7}"#)]
    #[case::base_info_response(assert_round_trip::<monitoring::BaseInfoResponse>, r#"{"x_extra": "kept", "status": "s"}"#)]
    #[case::scheduler_info_response(assert_round_trip::<monitoring::SchedulerInfoResponse>, r#"{"x_extra": "kept", "status": "s", "latest_scheduler_heartbeat": "2025-01-02T03:04:05Z"}"#)]
    #[case::triggerer_info_response(assert_round_trip::<monitoring::TriggererInfoResponse>, r#"{"x_extra": "kept", "status": "s", "latest_triggerer_heartbeat": "2025-01-02T03:04:05Z"}"#)]
    #[case::dag_processor_info_response(assert_round_trip::<monitoring::DagProcessorInfoResponse>, r#"{"x_extra": "kept", "status": "s", "latest_dag_processor_heartbeat": "2025-01-02T03:04:05Z"}"#)]
    #[case::health_info_response(assert_round_trip::<monitoring::HealthInfoResponse>, r#"{"x_extra": "kept", "metadatabase": {"x_extra": "kept", "status": "s"}, "scheduler": {"x_extra": "kept", "status": "s", "latest_scheduler_heartbeat": "2025-01-02T03:04:05Z"}, "triggerer": {"x_extra": "kept", "status": "s", "latest_triggerer_heartbeat": "2025-01-02T03:04:05Z"}, "dag_processor": null}"#)]
    #[case::version_info(assert_round_trip::<monitoring::VersionInfo>, r#"{"x_extra": "kept", "version": "s", "git_version": "s"}"#)]
    #[case::pool_response(assert_round_trip::<pool::PoolResponse>, r#"{"x_extra": "kept", "name": "s", "slots": 7, "description": "s", "include_deferred": true, "occupied_slots": 7, "running_slots": 7, "queued_slots": 7, "scheduled_slots": 7, "open_slots": 7, "deferred_slots": 7}"#)]
    #[case::pool_collection_response(assert_round_trip::<pool::PoolCollectionResponse>, r#"{"x_extra": "kept", "pools": [{"x_extra": "kept", "name": "s", "slots": 7, "description": "s", "include_deferred": true, "occupied_slots": 7, "running_slots": 7, "queued_slots": 7, "scheduled_slots": 7, "open_slots": 7, "deferred_slots": 7}], "total_entries": 7}"#)]
    #[case::pool_body(assert_round_trip::<pool::PoolBody>, r#"{"x_extra": "kept", "name": "s", "slots": 7, "description": "s", "include_deferred": true}"#)]
    #[case::pool_patch_body(assert_round_trip::<pool::PoolPatchBody>, r#"{"x_extra": "kept", "pool": "s", "slots": 7, "description": "s", "include_deferred": true}"#)]
    #[case::time_delta(assert_round_trip::<task::TimeDelta>, r#"{"x_extra": "kept", "__type": "TimeDelta", "days": 7, "seconds": 7, "microseconds": 7}"#)]
    #[case::task_response(assert_round_trip::<task::TaskResponse>, r#"{"x_extra": "kept", "task_id": "s", "task_display_name": "s", "owner": "s", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "trigger_rule": "all_success", "depends_on_past": true, "wait_for_downstream": true, "retries": 1.5, "queue": "s", "pool": "s", "pool_slots": 1.5, "execution_timeout": null, "retry_delay": null, "retry_exponential_backoff": true, "priority_weight": 1.5, "weight_rule": "downstream", "ui_color": "s", "ui_fgcolor": "s", "template_fields": null, "downstream_task_ids": ["s"], "doc_md": "s", "operator_name": "s", "params": {"k": [1, "two"]}, "class_ref": {"k": [1, "two"]}, "is_mapped": true, "extra_links": ["s"]}"#)]
    #[case::task_collection_response(assert_round_trip::<task::TaskCollectionResponse>, r#"{"x_extra": "kept", "tasks": [{"x_extra": "kept", "task_id": "s", "task_display_name": "s", "owner": "s", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "trigger_rule": "all_success", "depends_on_past": true, "wait_for_downstream": true, "retries": 1.5, "queue": "s", "pool": "s", "pool_slots": 1.5, "execution_timeout": null, "retry_delay": null, "retry_exponential_backoff": true, "priority_weight": 1.5, "weight_rule": "downstream", "ui_color": "s", "ui_fgcolor": "s", "template_fields": null, "downstream_task_ids": ["s"], "doc_md": "s", "operator_name": "s", "params": {"k": [1, "two"]}, "class_ref": {"k": [1, "two"]}, "is_mapped": true, "extra_links": ["s"]}], "total_entries": 7}"#)]
    #[case::trigger_response(assert_round_trip::<taskinstance::TriggerResponse>, r#"{"x_extra": "kept", "id": 7, "classpath": "s", "kwargs": "s", "created_date": "2025-01-02T03:04:05Z", "triggerer_id": 7}"#)]
    #[case::job_response(assert_round_trip::<taskinstance::JobResponse>, r#"{"x_extra": "kept", "id": 7, "dag_id": "s", "state": "s", "job_type": "s", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "latest_heartbeat": "2025-01-02T03:04:05Z", "executor_class": "s", "hostname": "s", "unixname": "s"}"#)]
    #[case::task_instance_response(assert_round_trip::<taskinstance::TaskInstanceResponse>, r#"{"x_extra": "kept", "id": "s", "task_id": "s", "dag_id": "s", "dag_run_id": "s", "map_index": 7, "logical_date": "2025-01-02T03:04:05Z", "run_after": "2025-01-02T03:04:05Z", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "duration": 1.5, "state": "removed", "try_number": 7, "max_tries": 7, "task_display_name": "s", "dag_display_name": "s", "hostname": "s", "unixname": "s", "pool": "s", "pool_slots": 7, "queue": "s", "priority_weight": 7, "operator": "s", "queued_when": "2025-01-02T03:04:05Z", "scheduled_when": "2025-01-02T03:04:05Z", "pid": 7, "executor": "s", "executor_config": "s", "note": "s", "rendered_map_index": "s", "rendered_fields": {"k": [1, "two"]}, "trigger": null, "triggerer_job": null, "dag_version": null}"#)]
    #[case::task_instance_collection_response(assert_round_trip::<taskinstance::TaskInstanceCollectionResponse>, r#"{"x_extra": "kept", "task_instances": [{"x_extra": "kept", "id": "s", "task_id": "s", "dag_id": "s", "dag_run_id": "s", "map_index": 7, "logical_date": "2025-01-02T03:04:05Z", "run_after": "2025-01-02T03:04:05Z", "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "duration": 1.5, "state": "removed", "try_number": 7, "max_tries": 7, "task_display_name": "s", "dag_display_name": "s", "hostname": "s", "unixname": "s", "pool": "s", "pool_slots": 7, "queue": "s", "priority_weight": 7, "operator": "s", "queued_when": "2025-01-02T03:04:05Z", "scheduled_when": "2025-01-02T03:04:05Z", "pid": 7, "executor": "s", "executor_config": "s", "note": "s", "rendered_map_index": "s", "rendered_fields": {"k": [1, "two"]}, "trigger": null, "triggerer_job": null, "dag_version": null}], "total_entries": 7}"#)]
    #[case::task_instances_batch_body(assert_round_trip::<taskinstance::TaskInstancesBatchBody>, r#"{"x_extra": "kept", "dag_ids": ["s"], "dag_run_ids": ["s"], "task_ids": ["s"], "state": ["removed"], "run_after_gte": "2025-01-02T03:04:05Z", "run_after_lte": "2025-01-02T03:04:05Z", "logical_date_gte": "2025-01-02T03:04:05Z", "logical_date_lte": "2025-01-02T03:04:05Z", "start_date_gte": "2025-01-02T03:04:05Z", "start_date_lte": "2025-01-02T03:04:05Z", "end_date_gte": "2025-01-02T03:04:05Z", "end_date_lte": "2025-01-02T03:04:05Z", "duration_gte": 1.5, "duration_lte": 1.5, "pool": ["s"], "queue": ["s"], "executor": ["s"], "page_offset": 7, "page_limit": 7, "order_by": "s"}"#)]
    #[case::patch_task_instance_body(assert_round_trip::<taskinstance::PatchTaskInstanceBody>, r#"{"x_extra": "kept", "new_state": "success", "note": "s", "include_upstream": true, "include_downstream": true, "include_future": true, "include_past": true}"#)]
    #[case::clear_task_instances_body(assert_round_trip::<taskinstance::ClearTaskInstancesBody>, r#"{"x_extra": "kept", "dry_run": true, "start_date": "2025-01-02T03:04:05Z", "end_date": "2025-01-02T03:04:05Z", "only_failed": true, "only_running": true, "reset_dag_runs": true, "task_ids": ["s"], "dag_run_id": "s", "include_upstream": true, "include_downstream": true, "include_future": true, "include_past": true, "run_on_latest_version": true}"#)]
    #[case::structured_log_message(assert_round_trip::<taskinstance::StructuredLogMessage>, r#"{"x_extra": "kept", "timestamp": "2025-01-02T03:04:05Z", "event": "s"}"#)]
    #[case::task_instances_log_response(assert_round_trip::<taskinstance::TaskInstancesLogResponse>, r#"{"x_extra": "kept", "content": ["line one", "line two"], "continuation_token": "s"}"#)]
    #[case::variable_response(assert_round_trip::<variable::VariableResponse>, r#"{"x_extra": "kept", "key": "s", "value": "s", "description": "s", "is_encrypted": true}"#)]
    #[case::variable_collection_response(assert_round_trip::<variable::VariableCollectionResponse>, r#"{"x_extra": "kept", "variables": [{"x_extra": "kept", "key": "s", "value": "s", "description": "s", "is_encrypted": true}], "total_entries": 7}"#)]
    #[case::variable_body(assert_round_trip::<variable::VariableBody>, r#"{"x_extra": "kept", "key": "s", "value": {"k": [1, "two"]}, "description": "s"}"#)]
    #[case::x_com_response(assert_round_trip::<xcom::XComResponse>, r#"{"x_extra": "kept", "key": "s", "timestamp": "2025-01-02T03:04:05Z", "logical_date": "2025-01-02T03:04:05Z", "map_index": 7, "task_id": "s", "dag_id": "s", "run_id": "s", "dag_display_name": "s"}"#)]
    #[case::x_com_collection_response(assert_round_trip::<xcom::XComCollectionResponse>, r#"{"x_extra": "kept", "xcom_entries": [{"x_extra": "kept", "key": "s", "timestamp": "2025-01-02T03:04:05Z", "logical_date": "2025-01-02T03:04:05Z", "map_index": 7, "task_id": "s", "dag_id": "s", "run_id": "s", "dag_display_name": "s"}], "total_entries": 7}"#)]
    #[case::x_com_response_native(assert_round_trip::<xcom::XComResponseNative>, r#"{"x_extra": "kept", "key": "s", "timestamp": "2025-01-02T03:04:05Z", "logical_date": "2025-01-02T03:04:05Z", "map_index": 7, "task_id": "s", "dag_id": "s", "run_id": "s", "dag_display_name": "s", "value": {"k": [1, "two"]}}"#)]
    #[case::x_com_response_string(assert_round_trip::<xcom::XComResponseString>, r#"{"x_extra": "kept", "key": "s", "timestamp": "2025-01-02T03:04:05Z", "logical_date": "2025-01-02T03:04:05Z", "map_index": 7, "task_id": "s", "dag_id": "s", "run_id": "s", "dag_display_name": "s", "value": "s"}"#)]
    fn dtos_round_trip(#[case] check: fn(&str), #[case] raw: &str) {
        check(raw);
    }
}
