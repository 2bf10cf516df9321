use crate::cli::InfoArgs;
use crate::context::CliContext;
use crate::output::output_success;
use pagekit_core::validate;
use pagekit_domain::page_info;

pub fn handle(ctx: &CliContext, args: InfoArgs) -> anyhow::Result<()> {
    let page = validate::positive("page", args.page)?;
    let per_page = match args.per_page {
        Some(value) => Some(validate::positive("per-page", value)?),
        None => ctx.config.items_per_page,
    };
    let total_items = args
        .total_items
        .map(|value| validate::count("total-items", value))
        .transpose()?;

    let info = page_info::format(page, per_page, total_items)?;

    if ctx.json {
        return output_success(info);
    }
    match info {
        Some(info) => println!("{info}"),
        None => println!("(no page info)"),
    }
    Ok(())
}
