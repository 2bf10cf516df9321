use crate::cli::WalkArgs;
use crate::context::CliContext;
use crate::output::{output_success, render_range};
use pagekit_core::{validate, PagerError};
use pagekit_domain::{PageController, PageRange};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
    Total(usize),
    Lock,
    Unlock,
}

impl Step {
    fn parse(raw: &str) -> Result<Self, PagerError> {
        let invalid = || PagerError::invalid_input(format!("unknown step '{raw}'"));
        match raw {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "lock" => Ok(Self::Lock),
            "unlock" => Ok(Self::Unlock),
            _ => {
                let (name, value) = raw.split_once(':').ok_or_else(invalid)?;
                let value: i64 = value.parse().map_err(|_| invalid())?;
                match name {
                    "goto" => Ok(Self::GoTo(validate::count("goto", value)?)),
                    "total" => Ok(Self::Total(validate::count("total", value)?)),
                    _ => Err(invalid()),
                }
            }
        }
    }

    fn apply(&self, controller: &mut PageController) {
        match self {
            Self::Next => {
                controller.next();
            }
            Self::Previous => {
                controller.previous();
            }
            Self::First => {
                controller.first();
            }
            Self::Last => {
                controller.last();
            }
            Self::GoTo(page) => {
                controller.go_to(*page);
            }
            Self::Total(total) => controller.set_total_pages(*total),
            Self::Lock => controller.set_loading(true),
            Self::Unlock => controller.set_loading(false),
        }
    }
}

#[derive(Serialize)]
struct WalkStep {
    step: String,
    page: usize,
    total_pages: usize,
    notified: Vec<usize>,
    markers: PageRange,
}

pub fn handle(ctx: &CliContext, args: WalkArgs) -> anyhow::Result<()> {
    let steps = args
        .steps
        .iter()
        .map(|raw| Step::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let total_pages = validate::count("total", args.total)?;
    let start = validate::positive("start", args.start)?;
    let mut controller = PageController::new(total_pages)
        .with_sibling_count(ctx.sibling_count(args.siblings)?)
        .with_initial_page(start);

    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    controller.subscribe(move |page: usize| sink.borrow_mut().push(page));

    let mut report = vec![snapshot("start", &controller, Vec::new())];
    for (raw, step) in args.steps.iter().zip(&steps) {
        step.apply(&mut controller);
        let changes = notified.borrow_mut().drain(..).collect();
        report.push(snapshot(raw, &controller, changes));
    }

    if ctx.json {
        return output_success(report);
    }
    for entry in &report {
        let line = render_range(&entry.markers, entry.page, ctx.ellipsis());
        println!("{:<10} {}", entry.step, line);
    }
    Ok(())
}

fn snapshot(step: &str, controller: &PageController, notified: Vec<usize>) -> WalkStep {
    WalkStep {
        step: step.to_string(),
        page: controller.current_page(),
        total_pages: controller.total_pages(),
        notified,
        markers: controller.range(),
    }
}
