use curator_core::{Capabilities, Curator, CuratorError, HostBridge, Transport};
use serde_json::{Value, json};
use std::io::{self, Write};

/// Host bridge that emits deliveries as JSONL records on stdout.
pub struct JsonBridge;

impl JsonBridge {
    fn emit(record: Value) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", record)?;
        stdout.flush()
    }
}

impl HostBridge for JsonBridge {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn send_html(&mut self, html: &str) -> io::Result<()> {
        Self::emit(json!({"type": "send_html", "html": html}))
    }

    fn send_text(&mut self, text: &str) -> io::Result<()> {
        Self::emit(json!({"type": "send_text", "text": text}))
    }

    fn close_library(&mut self) -> io::Result<()> {
        Self::emit(json!({"type": "close_library"}))
    }
}

/// The controller's state after a submission, as one record.
pub fn result_record<T: Transport>(curator: &Curator<T>) -> Value {
    let mut record = json!({
        "type": "result",
        "state": curator.state(),
        "preview_mode": curator.preview_mode(),
        "sections": curator.sections(),
        "html": curator.generated_html(),
        "response": curator.response(),
    });
    if !curator.error_message().is_empty() {
        record["error"] = json!(curator.error_message());
    }
    record
}

pub fn emit_result<T: Transport>(curator: &Curator<T>) {
    println!("{}", result_record(curator));
}

/// Final record on stderr.
pub fn done_record(result: &Result<(), CuratorError>) -> Value {
    match result {
        Ok(()) => json!({"type": "done", "ok": true}),
        Err(e) => json!({
            "type": "done",
            "ok": false,
            "code": e.code(),
            "message": e.user_message(),
        }),
    }
}

pub fn emit_done(result: &Result<(), CuratorError>) {
    eprintln!("{}", done_record(result));
}

/// Final record for stdin that never made it to the controller.
pub fn emit_invalid_input(message: &str) {
    eprintln!(
        "{}",
        json!({"type": "done", "ok": false, "code": "invalid_input", "message": message})
    );
}
