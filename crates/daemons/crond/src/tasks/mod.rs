pub mod reconcile_progress;
