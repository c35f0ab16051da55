pub mod order;
pub mod room;

use crate::cli::RoomFieldArgs;
use crate::context::CliContext;
use workorder_core::WorkOrderResult;
use workorder_domain::RoomField;

/// Applies every field that was given on the command line.
/// Returns how many fields were set.
pub(crate) fn apply_room_fields(
    ctx: &mut CliContext,
    index: usize,
    fields: RoomFieldArgs,
) -> WorkOrderResult<usize> {
    let updates = [
        (RoomField::RoomName, fields.name),
        (RoomField::RoomType, fields.room_type),
        (RoomField::DoorStyle, fields.door_style),
        (RoomField::DoorCount, fields.door_count),
    ];

    let mut applied = 0;
    for (field, value) in updates {
        if let Some(value) = value {
            ctx.controller.set_room_field(index, field, value)?;
            applied += 1;
        }
    }
    Ok(applied)
}
