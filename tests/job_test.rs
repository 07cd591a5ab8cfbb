use email_harvest::*;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn test_request_rejects_blank_input() {
    let err = ExtractionRequest::from_fields("", "out.txt", ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidInput));
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Please select a valid input file");
}

#[test]
fn test_request_rejects_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.txt");
    let err = ExtractionRequest::from_fields(
        input.to_str().unwrap(),
        "out.txt",
        ExtractOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ExtractError::InvalidInput));
}

#[test]
fn test_request_rejects_blank_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    std::fs::write(&input, "a@b.co").unwrap();

    let err = ExtractionRequest::from_fields(input.to_str().unwrap(), "  ", ExtractOptions::default())
        .unwrap_err();
    assert!(matches!(err, ExtractError::MissingOutput));
    assert_eq!(err.to_string(), "Please specify output file");
}

#[test]
fn test_run_writes_output_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "Write to a@b.co or c@d.org, not a@b.co.").unwrap();

    let request = ExtractionRequest::new(&input, &output, ExtractOptions::new(false));
    let report = request.run().unwrap();

    assert_eq!(report.count(), 3);
    assert_eq!(report.emails, vec!["a@b.co", "c@d.org", "a@b.co"]);
    assert_eq!(report.status_line(), "Extracted 3 emails to out.txt");
    assert!(report.finished_at >= report.started_at);
    assert_eq!(read_emails(&output).unwrap(), report.emails);
}

#[test]
fn test_run_empty_input_writes_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "").unwrap();

    let report = ExtractionRequest::new(&input, &output, ExtractOptions::default())
        .run()
        .unwrap();

    assert_eq!(report.count(), 0);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_report_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "a@b.co").unwrap();

    let report = ExtractionRequest::new(&input, &output, ExtractOptions::default())
        .run()
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["emails"][0], "A@B.Co");
    assert!(json["started_at"].is_string());
}

#[test]
fn test_preview_truncates() {
    let emails: Vec<String> = (0..25).map(|i| format!("user{i}@example.com")).collect();
    let preview = Preview::new(&emails, PREVIEW_LIMIT);

    assert_eq!(preview.shown.len(), 20);
    assert_eq!(preview.remaining, 5);

    let text = preview.render();
    assert!(text.starts_with("user0@example.com\n"));
    assert!(text.contains("user19@example.com\n"));
    assert!(!text.contains("user20@example.com"));
    assert!(text.ends_with("\n... and 5 more"));
}

#[test]
fn test_preview_short_list() {
    let emails = vec!["a@b.co".to_string(), "c@d.org".to_string()];
    let preview = Preview::new(&emails, PREVIEW_LIMIT);

    assert_eq!(preview.remaining, 0);
    assert_eq!(preview.render(), "a@b.co\nc@d.org\n");
    assert_eq!(Preview::new(&[], PREVIEW_LIMIT).render(), "");
}

#[test]
fn test_worker_reports_started_then_finished() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "a@b.co").unwrap();

    let mut worker = Worker::default();
    let job = worker.spawn(ExtractionRequest::new(&input, &output, ExtractOptions::default()));

    let first = worker.wait_event(TIMEOUT).unwrap();
    assert!(matches!(first, JobEvent::Started { .. }));
    assert_eq!(first.job(), job);

    match worker.wait_event(TIMEOUT).unwrap() {
        JobEvent::Finished { job: id, report } => {
            assert_eq!(id, job);
            assert_eq!(report.emails, vec!["A@B.Co"]);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(worker.try_events().is_empty());
}

#[test]
fn test_worker_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let request = ExtractionRequest::new(
        dir.path().join("gone.txt"),
        dir.path().join("out.txt"),
        ExtractOptions::default(),
    );

    let mut worker = Worker::default();
    let job = worker.spawn(request);

    assert!(matches!(
        worker.wait_event(TIMEOUT),
        Some(JobEvent::Started { .. })
    ));
    match worker.wait_event(TIMEOUT).unwrap() {
        JobEvent::Failed { job: id, message } => {
            assert_eq!(id, job);
            assert!(message.starts_with("Failed to read"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_worker_job_ids_are_distinct() {
    let dir = tempfile::tempdir().unwrap();
    let mut worker = Worker::default();
    let request = ExtractionRequest::new(
        dir.path().join("gone.txt"),
        dir.path().join("out.txt"),
        ExtractOptions::default(),
    );

    let a = worker.spawn(request.clone());
    let b = worker.spawn(request);
    assert_ne!(a, b);
}
