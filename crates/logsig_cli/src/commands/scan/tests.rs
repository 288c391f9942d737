use super::*;
use pretty_assertions::assert_eq;

fn run(
    command: fn(&str, &RunConfig, &mut Vec<u8>, &mut Vec<u8>) -> io::Result<bool>,
    text: &str,
    config: &RunConfig,
) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = command(text, config, &mut out, &mut err).unwrap();
    (
        ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn sig_prints_one_line_each() {
    let text = "Jan 12 06:49:56 irc last message repeated 6 times\n\
                Jan 12 06:49:57 irc last message repeated 2 times\n";
    let (ok, out, err) = run(run_sig, text, &RunConfig::default());
    assert!(ok);
    assert_eq!(out, "%time%%integer%\n%time%%integer%\n");
    assert_eq!(err, "");
}

#[test]
fn scan_prints_token_tables() {
    let (ok, out, _) = run(run_scan, "port 22", &RunConfig::default());
    assert!(ok);
    assert_eq!(
        out,
        "0  literal  unknown   none   \"port\"\n1  integer  unknown   none   \"22\"\n\n"
    );
}

#[test]
fn scan_with_roles() {
    let mut config = RunConfig::default();
    config.scanner.key_value_roles = true;
    let (_, out, _) = run(run_scan, "port=22", &config);
    assert!(out.contains("key    \"port\""));
    assert!(out.contains("value  \"22\""));
}

#[test]
fn failed_lines_go_to_stderr() {
    let mut config = RunConfig::default();
    config.scanner.max_line_len = 10;
    let (ok, out, err) = run(run_sig, "a=1\nthis line is too long\nb=2", &config);
    assert!(!ok);
    assert_eq!(out, "a=%integer%\nb=%integer%\n");
    assert_eq!(err, "line 2: line too long: 21 bytes (max: 10 bytes)\n");
}
