use crate::cli::RangeArgs;
use crate::context::CliContext;
use crate::output::{output_success, render_range};
use pagekit_core::validate;
use pagekit_domain::{range, PageMarker};
use serde::Serialize;

#[derive(Serialize)]
struct RangeOutput {
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
    markers: Vec<PageMarker>,
}

pub fn handle(ctx: &CliContext, args: RangeArgs) -> anyhow::Result<()> {
    let current_page = validate::count("current", args.current)?;
    let total_pages = validate::count("total", args.total)?;
    let sibling_count = ctx.sibling_count(args.siblings)?;

    let range = range::compute(current_page, total_pages, sibling_count)?;

    if ctx.json {
        output_success(RangeOutput {
            current_page,
            total_pages,
            sibling_count,
            markers: range.markers().to_vec(),
        })
    } else {
        println!("{}", render_range(&range, current_page, ctx.ellipsis()));
        Ok(())
    }
}
