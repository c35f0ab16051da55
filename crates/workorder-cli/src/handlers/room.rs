use crate::cli::RoomAction;
use crate::context::{room_views, CliContext, RoomView};
use crate::handlers::apply_room_fields;
use crate::output;
use workorder_core::WorkOrderError;
use workorder_domain::{CompletionFlag, RoomRecord};

pub fn handle(ctx: &mut CliContext, action: RoomAction) -> anyhow::Result<()> {
    match action {
        RoomAction::Add(args) => {
            let index = ctx.controller.push_room(RoomRecord::default());
            apply_room_fields(ctx, index, args.fields)?;
            if args.nests {
                ctx.controller
                    .set_room_flag(index, CompletionFlag::Nests, true)?;
            }
            if args.labels {
                ctx.controller
                    .set_room_flag(index, CompletionFlag::Labels, true)?;
            }
            ctx.save()?;
            output::output_success(RoomView::new(index, ctx.document().room(index)?));
        }
        RoomAction::List => {
            output::output_list(room_views(ctx.document()));
        }
        RoomAction::Update(args) => {
            let index = args.index;
            // Surface a bad index before complaining about missing fields
            ctx.document().room(index)?;
            if apply_room_fields(ctx, index, args.fields)? == 0 {
                return Err(WorkOrderError::Validation(
                    "Nothing to update: pass at least one room field".to_string(),
                )
                .into());
            }
            ctx.save()?;
            output::output_success(RoomView::new(index, ctx.document().room(index)?));
        }
        RoomAction::Toggle { index, flag } => {
            let change = ctx.controller.toggle_room(index, flag.into())?;
            ctx.save()?;
            output::output_success(serde_json::json!({
                "room": RoomView::new(index, ctx.document().room(index)?),
                "change": change,
            }));
        }
        RoomAction::Remove { index } => {
            let removed = ctx.remove_room(index)?;
            ctx.save()?;
            output::output_success(serde_json::json!({
                "removed": index,
                "room_name": removed.room_name,
            }));
        }
    }
    Ok(())
}
