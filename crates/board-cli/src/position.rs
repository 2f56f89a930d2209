use crate::{CliError, CliResult};

use board_core::{BoardPosition, ListId};

/// Parse a `<list>:<index>` slot, e.g. `2:0` for the top of list 2
pub fn parse_position(value: &str) -> CliResult<BoardPosition> {
    let (list, index) = value
        .split_once(':')
        .ok_or_else(|| CliError::invalid_position(value))?;

    let list_id = list
        .trim()
        .parse::<u32>()
        .map_err(|_| CliError::invalid_position(value))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| CliError::invalid_position(value))?;

    Ok(BoardPosition::new(ListId(list_id), index))
}
