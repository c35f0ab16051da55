use crate::cli::{CreateArgs, OrderAction};
use crate::context::{CliContext, DocumentView};
use crate::handlers::apply_room_fields;
use crate::output;
use workorder_core::WorkOrderError;

pub fn handle_create(file_path: &str, args: CreateArgs) -> anyhow::Result<()> {
    let mut ctx = CliContext::create(file_path)?;
    ctx.controller.set_work_order(args.work_order);
    ctx.controller.set_project_name(args.project);
    let index = ctx.controller.add_room(None);
    apply_room_fields(&mut ctx, index, args.room)?;
    ctx.save()?;

    tracing::info!("Created work order file {}", ctx.path().display());
    output::output_success(DocumentView::new(ctx.document()));
    Ok(())
}

pub fn handle_show(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_success(DocumentView::new(ctx.document()));
    Ok(())
}

pub fn handle(ctx: &mut CliContext, action: OrderAction) -> anyhow::Result<()> {
    match action {
        OrderAction::Update {
            work_order,
            project,
        } => {
            if work_order.is_none() && project.is_none() {
                return Err(WorkOrderError::Validation(
                    "Nothing to update: pass --work-order and/or --project".to_string(),
                )
                .into());
            }
            if let Some(work_order) = work_order {
                ctx.controller.set_work_order(work_order);
            }
            if let Some(project) = project {
                ctx.controller.set_project_name(project);
            }
            ctx.save()?;

            let document = ctx.document();
            output::output_success(serde_json::json!({
                "work_order": document.work_order,
                "project_name": document.project_name,
            }));
        }
    }
    Ok(())
}
