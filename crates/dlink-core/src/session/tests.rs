use super::*;
use crate::browser::BrowserError;
use crate::extractor::{CapturedOutput, ExtractorError};
use crate::media_info::{parse_dump_json, MediaInfo, MediaInfoError};
use std::cell::RefCell;
use std::io::{self, Cursor, Read};
use std::rc::Rc;

const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[derive(Debug, Clone, PartialEq)]
enum Event {
    List(String),
    Resolve { url: String, format_id: String },
    Info(String),
    Read,
    Open(String),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct FakeExtractor {
    log: Log,
    stdout: String,
    info_json: Option<String>,
}

impl FakeExtractor {
    fn new(stdout: &str) -> Self {
        Self {
            log: Log::default(),
            stdout: stdout.to_string(),
            info_json: None,
        }
    }
}

impl Extractor for FakeExtractor {
    fn list_formats(&self, url: &str) -> Result<(), ExtractorError> {
        self.log.borrow_mut().push(Event::List(url.to_string()));
        Ok(())
    }

    fn resolve_direct_url(
        &self,
        url: &str,
        format_id: &str,
    ) -> Result<CapturedOutput, ExtractorError> {
        self.log.borrow_mut().push(Event::Resolve {
            url: url.to_string(),
            format_id: format_id.to_string(),
        });
        Ok(CapturedOutput::new(self.stdout.clone()))
    }

    fn media_info(&self, url: &str) -> Result<MediaInfo, ExtractorError> {
        self.log.borrow_mut().push(Event::Info(url.to_string()));
        match &self.info_json {
            Some(json) => Ok(parse_dump_json(json, url)?),
            None => Err(ExtractorError::MediaInfo(MediaInfoError::Empty)),
        }
    }
}

struct FakeBrowser {
    log: Log,
    fail: bool,
}

impl BrowserLauncher for FakeBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        self.log.borrow_mut().push(Event::Open(url.to_string()));
        if self.fail {
            return Err(BrowserError::Spawn {
                program: "xdg-open".to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }
}

/// Input that records each time the session pulls more bytes.
struct LoggedInput {
    inner: Cursor<Vec<u8>>,
    log: Log,
}

impl Read for LoggedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for LoggedInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.log.borrow_mut().push(Event::Read);
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

struct Run {
    outcome: Result<SessionOutcome>,
    events: Vec<Event>,
    output: String,
}

fn run_with(input: &str, stdout: &str, options: SessionOptions) -> Run {
    run_full(input, FakeExtractor::new(stdout), false, options)
}

fn run_full(
    input: &str,
    mut extractor: FakeExtractor,
    fail_browser: bool,
    options: SessionOptions,
) -> Run {
    let log: Log = Log::default();
    extractor.log = Rc::clone(&log);
    let browser = FakeBrowser {
        log: Rc::clone(&log),
        fail: fail_browser,
    };
    let reader = LoggedInput {
        inner: Cursor::new(input.as_bytes().to_vec()),
        log: Rc::clone(&log),
    };
    let mut prompt = Prompt::new(reader, Vec::new());
    let outcome = Session::new(&extractor, &browser, options).run(URL, &mut prompt);
    let (_, out) = prompt.into_parts();
    let events = log.borrow().clone();
    Run {
        outcome,
        events,
        output: String::from_utf8(out).unwrap(),
    }
}

fn non_read(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|e| **e != Event::Read).cloned().collect()
}

#[test]
fn lists_then_prompts_then_resolves() {
    let run = run_with("18\nn\n", "https://cdn.example/v.mp4\n", SessionOptions::default());
    let outcome = run.outcome.unwrap();
    assert_eq!(run.events[0], Event::List(URL.to_string()));
    assert_eq!(run.events[1], Event::Read);
    assert_eq!(
        non_read(&run.events),
        vec![
            Event::List(URL.to_string()),
            Event::Resolve {
                url: URL.to_string(),
                format_id: "18".to_string()
            },
        ]
    );
    assert_eq!(outcome.format_id, "18");
    assert!(!outcome.opened_browser);
}

#[test]
fn format_input_trimmed_and_forwarded_verbatim() {
    let run = run_with("  bv*+ba/b  \n\n", "x", SessionOptions::default());
    assert_eq!(run.outcome.unwrap().format_id, "bv*+ba/b");
    assert!(run.events.contains(&Event::Resolve {
        url: URL.to_string(),
        format_id: "bv*+ba/b".to_string()
    }));
}

#[test]
fn direct_url_trimmed_and_printed() {
    let run = run_with(
        "18\nn\n",
        "  https://example.com/video.mp4?exp=123  \n",
        SessionOptions::default(),
    );
    assert_eq!(
        run.outcome.unwrap().direct_url,
        "https://example.com/video.mp4?exp=123"
    );
    assert!(run.output.contains(
        "\nDirect URL for format 18:\nhttps://example.com/video.mp4?exp=123\n\n"
    ));
    assert!(run.output.contains(DEFAULT_EXPIRY_NOTICE));
}

#[test]
fn output_order_and_prompts() {
    let run = run_with("18\nn\n", "https://cdn.example/v", SessionOptions::default());
    let out = &run.output;
    let fetching = out.find("Fetching available formats...").unwrap();
    let ask_format = out.find(FORMAT_PROMPT).unwrap();
    let resolving = out.find("Fetching direct link...").unwrap();
    let notice = out.find(DEFAULT_EXPIRY_NOTICE).unwrap();
    let ask_open = out.find(OPEN_PROMPT).unwrap();
    assert!(fetching < ask_format);
    assert!(ask_format < resolving);
    assert!(resolving < notice);
    assert!(notice < ask_open);
}

#[test]
fn browser_opens_on_y_any_case() {
    for answer in ["y", "Y", "y "] {
        let input = format!("18\n{answer}\n");
        let run = run_with(&input, "https://cdn.example/v\n", SessionOptions::default());
        assert!(run.outcome.unwrap().opened_browser, "answer {answer:?}");
        assert_eq!(
            run.events.last(),
            Some(&Event::Open("https://cdn.example/v".to_string()))
        );
    }
}

#[test]
fn browser_not_opened_otherwise() {
    for answer in ["n", "", "yes"] {
        let input = format!("18\n{answer}\n");
        let run = run_with(&input, "https://cdn.example/v\n", SessionOptions::default());
        assert!(!run.outcome.unwrap().opened_browser, "answer {answer:?}");
        assert!(!run.events.iter().any(|e| matches!(e, Event::Open(_))));
    }
}

#[test]
fn eof_at_format_prompt_stops_before_resolving() {
    let run = run_with("", "https://cdn.example/v", SessionOptions::default());
    let err = run.outcome.unwrap_err();
    assert!(format!("{err:#}").contains("read format ID"));
    let io_err = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(non_read(&run.events), vec![Event::List(URL.to_string())]);
}

#[test]
fn eof_at_browser_prompt_is_error_without_launch() {
    let run = run_with("18\n", "https://cdn.example/v", SessionOptions::default());
    let err = run.outcome.unwrap_err();
    assert!(format!("{err:#}").contains("read browser answer"));
    assert!(!run.events.iter().any(|e| matches!(e, Event::Open(_))));
    assert!(run.output.contains("https://cdn.example/v"));
}

#[test]
fn empty_resolution_still_offered_to_browser() {
    let run = run_with("999\ny\n", "  \n", SessionOptions::default());
    let outcome = run.outcome.unwrap();
    assert_eq!(outcome.direct_url, "");
    assert!(outcome.opened_browser);
    assert_eq!(run.events.last(), Some(&Event::Open(String::new())));
}

#[test]
fn browser_failure_propagates() {
    let run = run_full(
        "18\ny\n",
        FakeExtractor::new("https://cdn.example/v"),
        true,
        SessionOptions::default(),
    );
    let err = run.outcome.unwrap_err();
    assert!(format!("{err:#}").contains("open direct URL in browser"));
}

#[test]
fn same_inputs_same_invocations() {
    let a = run_with("18\nn\n", "https://cdn.example/v", SessionOptions::default());
    let b = run_with("18\nn\n", "https://cdn.example/v", SessionOptions::default());
    assert_eq!(a.events, b.events);
    assert_eq!(a.output, b.output);
}

#[test]
fn preselected_format_skips_listing_and_prompt() {
    let options = SessionOptions {
        format_id: Some(" 22 ".to_string()),
        ..SessionOptions::default()
    };
    let run = run_with("n\n", "https://cdn.example/22", options);
    let outcome = run.outcome.unwrap();
    assert_eq!(outcome.format_id, "22");
    assert_eq!(
        non_read(&run.events),
        vec![Event::Resolve {
            url: URL.to_string(),
            format_id: "22".to_string()
        }]
    );
    assert!(!run.output.contains(FORMAT_PROMPT));
}

#[test]
fn table_listing_uses_media_info() {
    let mut extractor = FakeExtractor::new("https://cdn.example/18");
    extractor.info_json = Some(
        r#"{"title":"Clip","formats":[{"format_id":"18","url":"u","ext":"mp4"}]}"#.to_string(),
    );
    let options = SessionOptions {
        listing: Listing::Table,
        ..SessionOptions::default()
    };
    let run = run_full("18\nn\n", extractor, false, options);
    assert!(run.outcome.is_ok());
    assert_eq!(run.events[0], Event::Info(URL.to_string()));
    assert!(!run.events.iter().any(|e| matches!(e, Event::List(_))));
    assert!(run.output.contains("Clip\n"));
    assert!(run.output.contains("18 "));
}

#[test]
fn table_listing_falls_back_to_raw() {
    let options = SessionOptions {
        listing: Listing::Table,
        ..SessionOptions::default()
    };
    let run = run_with("18\nn\n", "https://cdn.example/18", options);
    assert!(run.outcome.is_ok());
    assert_eq!(
        &non_read(&run.events)[..2],
        &[Event::Info(URL.to_string()), Event::List(URL.to_string())]
    );
    assert!(run.output.contains("showing raw listing"));
}

#[test]
fn custom_expiry_notice() {
    let options = SessionOptions {
        expiry_notice: "Link valid for about six hours.".to_string(),
        ..SessionOptions::default()
    };
    let run = run_with("18\nn\n", "https://cdn.example/18", options);
    assert!(run.output.contains("Link valid for about six hours.\n"));
    assert!(!run.output.contains(DEFAULT_EXPIRY_NOTICE));
}
