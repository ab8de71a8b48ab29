//! Sequential execution of a [`MigrationPlan`].
use super::{Context, ExecutionStats, ItemOutcome, MigrationItem, MigrationPlan};
use crate::resources::copy::FileCopy;
use crate::resources::{Applicable as _, Resource as _, ResourceChange, ResourceState};

/// Walk `plan` in order and attach an outcome to every item.
///
/// Items that already carry an outcome are left as they are. Per-item
/// failures are recorded as [`ItemOutcome::Failed`] and never stop the loop.
pub fn execute(plan: &mut MigrationPlan, ctx: &Context) -> ExecutionStats {
    ctx.log.stage(if ctx.dry_run {
        "Previewing migration"
    } else {
        "Starting migration"
    });

    let total = plan.items.len();
    for (index, item) in plan.items.iter_mut().enumerate() {
        if item.outcome.is_none() {
            item.outcome = Some(migrate_item(item, ctx));
        }
        ctx.log.progress(index + 1, total);
    }
    ctx.log.finish_progress();

    let stats = plan.stats();
    plan.skipped_items = stats.skipped();
    ctx.log.info(&stats.summary(ctx.dry_run));
    stats
}

fn migrate_item(item: &MigrationItem, ctx: &Context) -> ItemOutcome {
    let resource = FileCopy::new(item.source_path.clone(), item.destination_path.clone());

    let state = match resource.current_state() {
        Ok(state) => state,
        Err(e) => return fail(item, ctx, &e),
    };

    match state {
        ResourceState::SourceMissing => {
            ctx.log
                .debug(&format!("skipped (not found): {}", item.description));
            ItemOutcome::SkippedMissingSource
        }
        ResourceState::SameFile => {
            ctx.log.warn(&format!(
                "skipped (same file): {} ({})",
                item.description,
                item.destination_path.display()
            ));
            ItemOutcome::SkippedExists
        }
        ResourceState::TargetExists if !ctx.force => {
            ctx.log.warn(&format!(
                "skipped (exists): {} ({})",
                item.description,
                item.destination_path.display()
            ));
            ItemOutcome::SkippedExists
        }
        ResourceState::TargetExists | ResourceState::Ready { .. } if ctx.dry_run => {
            if let (ResourceState::Ready { parent_missing: true }, Some(parent)) =
                (state, item.destination_path.parent())
            {
                ctx.log
                    .dry_run(&format!("would create directory: {}", parent.display()));
            }
            ctx.log
                .dry_run(&format!("would migrate: {}", item.description));
            ItemOutcome::WouldMigrate
        }
        ResourceState::TargetExists | ResourceState::Ready { .. } => {
            ctx.log.debug(&resource.description());
            match resource.apply() {
                Ok(ResourceChange::Created) => {
                    ctx.log.success(&format!("migrated: {}", item.description));
                    ItemOutcome::Migrated
                }
                Ok(ResourceChange::Overwritten) => {
                    ctx.log
                        .success(&format!("migrated (overwritten): {}", item.description));
                    ItemOutcome::Migrated
                }
                Err(e) => fail(item, ctx, &e),
            }
        }
    }
}

fn fail(item: &MigrationItem, ctx: &Context, err: &anyhow::Error) -> ItemOutcome {
    let reason = format!("{err:#}");
    ctx.log
        .error(&format!("error migrating {}: {reason}", item.description));
    ItemOutcome::Failed { reason }
}
