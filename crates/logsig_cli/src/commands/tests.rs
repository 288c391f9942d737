use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let (config, path) = parse_options(&[]).unwrap();
    assert_eq!(config, RunConfig::default());
    assert!(config.parallel);
    assert!(!config.scanner.key_value_roles);
    assert_eq!(path, None);
}

#[test]
fn flags_and_path() {
    let (config, path) = parse_options(&args(&[
        "--kv",
        "--no-parallel",
        "--max-line=4096",
        "--top=5",
        "auth.log",
    ]))
    .unwrap();
    assert!(config.scanner.key_value_roles);
    assert!(!config.parallel);
    assert_eq!(config.scanner.max_line_len, 4096);
    assert_eq!(config.top, Some(5));
    assert_eq!(path.as_deref(), Some("auth.log"));
}

#[test]
fn dash_means_stdin() {
    let (_, path) = parse_options(&args(&["-", "--kv"])).unwrap();
    assert_eq!(path, None);
}

#[test]
fn bad_options() {
    assert_eq!(
        parse_options(&args(&["--verbose"])),
        Err(OptionError::UnknownOption("--verbose".to_string()))
    );
    assert_eq!(
        parse_options(&args(&["--top=ten"])),
        Err(OptionError::InvalidValue {
            option: "--top",
            value: "ten".to_string(),
        })
    );
    assert_eq!(
        parse_options(&args(&["a.log", "b.log"])),
        Err(OptionError::ExtraArgument("b.log".to_string()))
    );
    assert_eq!(
        OptionError::InvalidValue {
            option: "--max-line",
            value: "-1".to_string(),
        }
        .to_string(),
        "invalid value for --max-line: \"-1\""
    );
}

#[test]
fn read_input_from_file() {
    let path = std::env::temp_dir().join(format!("logsig-read-input-{}.log", std::process::id()));
    fs::write(&path, "a 1\nb 2\n").unwrap();
    let text = read_input(path.to_str()).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(text, "a 1\nb 2\n");
}

#[test]
fn invalid_utf8_only_affects_its_own_line() {
    let path = std::env::temp_dir().join(format!("logsig-bad-utf8-{}.log", std::process::id()));
    fs::write(&path, b"a 1\nb \xff 2\nc 3\n").unwrap();
    let text = read_input(path.to_str()).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(text, "a 1\nb \u{FFFD} 2\nc 3\n");

    let sigs = render_lines(&text, &RunConfig::default(), Sequence::signature);
    assert_eq!(
        sigs,
        vec![
            Ok("a%integer%".to_string()),
            Ok("b\u{FFFD}%integer%".to_string()),
            Ok("c%integer%".to_string()),
        ]
    );
}

#[test]
fn decode_lossy_keeps_valid_text() {
    assert_eq!(decode_lossy(b"port 22".to_vec()), "port 22");
    assert_eq!(decode_lossy(vec![b'x', 0xC3]), "x\u{FFFD}");
}

#[test]
fn read_input_missing_file() {
    assert!(read_input(Some("/nonexistent/logsig/input.log")).is_err());
}

#[test]
fn parallel_and_sequential_agree() {
    let text = "Jan 12 06:49:42 irc sshd[7034]: port 4228\nsrc=10.0.0.1 dst=10.0.0.2\n\nx 1.5";
    let parallel = render_lines(text, &RunConfig::default(), Sequence::signature);
    let sequential = render_lines(
        text,
        &RunConfig {
            parallel: false,
            ..RunConfig::default()
        },
        Sequence::signature,
    );
    assert_eq!(parallel, sequential);
    assert_eq!(
        sequential,
        vec![
            Ok("%time%[%integer%]:%integer%".to_string()),
            Ok("=%ipv4%=%ipv4%".to_string()),
            Ok(String::new()),
            Ok("x%float%".to_string()),
        ]
    );
}

#[test]
fn failures_are_numbered_from_one() {
    let mut config = RunConfig::default();
    config.scanner.max_line_len = 3;
    let results = render_lines("ok\ntoo long\nab", &config, Sequence::signature);
    let mut err = Vec::new();
    let ok = report_failures(&results, &mut err).unwrap();
    assert!(!ok);
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "line 2: line too long: 8 bytes (max: 3 bytes)\n"
    );
}
