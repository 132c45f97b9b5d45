pub mod orchestrator_loop;
pub mod todo_check;
