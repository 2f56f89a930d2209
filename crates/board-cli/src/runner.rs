use crate::{CliResult, Commands, parse_position};

use board_core::{BoardSnapshot, CoreError, ProjectId, TaskId, TaskMove, UserId};
use board_sync::{BoardApi, BoardSynchronizer, MoveOutcome};

use std::sync::Arc;

use log::info;
use serde_json::{Map, Value};

/// Execute one command against the synchronizer and return the JSON to print
pub async fn run<A: BoardApi>(sync: &BoardSynchronizer<A>, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Show { project_id, mine } => {
            sync.load(&ProjectId::from(project_id)).await?;
            let snapshot = current(sync)?;

            match mine {
                Some(user_id) => {
                    let user_id = UserId::from(user_id);
                    let lists = snapshot.tasks_for_member(&user_id);

                    let mut output = Map::new();
                    output.insert(
                        "projectId".to_string(),
                        Value::from(snapshot.project_id().as_str()),
                    );
                    output.insert("userId".to_string(), Value::from(user_id.as_str()));
                    output.insert("lists".to_string(), serde_json::to_value(lists)?);
                    Ok(Value::Object(output))
                }
                None => Ok(serde_json::to_value(&*snapshot)?),
            }
        }

        Commands::Move {
            project_id,
            task_id,
            from,
            to,
        } => {
            let source = parse_position(&from)?;
            let destination = parse_position(&to)?;
            let task_move = TaskMove::new(TaskId::from(task_id), source, destination);

            sync.load(&ProjectId::from(project_id)).await?;
            let outcome = sync.move_task(&task_move).await?;
            info!("Move of task {} {}", task_move.task_id, outcome.label());

            let snapshot = current(sync)?;

            let mut output = Map::new();
            output.insert("outcome".to_string(), Value::from(outcome.label()));
            if let MoveOutcome::Resynced { ref cause } | MoveOutcome::Abandoned { ref cause } =
                outcome
            {
                output.insert("cause".to_string(), Value::from(cause.to_string()));
            }
            output.insert("snapshot".to_string(), serde_json::to_value(&*snapshot)?);
            Ok(Value::Object(output))
        }
    }
}

fn current<A: BoardApi>(sync: &BoardSynchronizer<A>) -> CliResult<Arc<BoardSnapshot>> {
    Ok(sync.snapshot().ok_or_else(CoreError::no_snapshot)?)
}
