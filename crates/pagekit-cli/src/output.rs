use pagekit_domain::{PageMarker, PageRange};
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Outputs an error response to stderr and terminates the process with
/// exit code 1.
pub fn output_error(message: &str, json: bool) -> ! {
    if json {
        let response: CliResponse<()> = CliResponse {
            success: false,
            api_version: env!("CARGO_PKG_VERSION"),
            data: None,
            error: Some(message.to_string()),
        };
        match serde_json::to_string(&response) {
            Ok(line) => eprintln!("{line}"),
            Err(_) => eprintln!("error: {message}"),
        }
    } else {
        eprintln!("error: {message}");
    }
    std::process::exit(1);
}

/// Render markers on one line, bracketing the current page.
pub fn render_range(range: &PageRange, current_page: usize, ellipsis: &str) -> String {
    if range.is_empty() {
        return "(no pagination)".to_string();
    }
    range
        .iter()
        .map(|marker| match marker {
            PageMarker::Page { index } if *index == current_page => format!("[{index}]"),
            PageMarker::Page { index } => index.to_string(),
            PageMarker::Ellipsis => ellipsis.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
