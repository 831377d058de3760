//! End-to-end tests for the text-in, text-out expansion path.

use cidrex::cli::{ExpandCommand, InfoCommand, OutputFormat};
use cidrex::{ExpandError, Expander};
use std::io::Write;

#[test]
fn batch_text_expands_in_input_order() {
    let input = "192.168.1.0/30\r\n\n   10.0.0.4/31\t\n";
    let addresses = Expander::default().expand_many(input).unwrap();
    assert_eq!(
        addresses,
        vec![
            "192.168.1.0",
            "192.168.1.1",
            "192.168.1.2",
            "192.168.1.3",
            "10.0.0.4",
            "10.0.0.5",
        ]
    );
}

#[test]
fn bad_line_discards_whole_batch() {
    let input = "192.168.1.0/24\n10.0.0.0/33\n172.16.0.0/24";
    let err = Expander::default().expand_many(input).unwrap_err();
    assert_eq!(err, ExpandError::InvalidCidrFormat("10.0.0.0/33".to_string()));
}

#[test]
fn first_error_wins_in_line_order() {
    let input = "bogus\n10.0.0.0/0";
    let err = Expander::default().expand_many(input).unwrap_err();
    assert_eq!(err, ExpandError::InvalidCidrFormat("bogus".to_string()));
}

#[test]
fn expand_command_reads_cidrs_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "10.0.0.0/30").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  192.168.0.0/31").unwrap();

    let cmd = ExpandCommand {
        cidrs: vec![],
        file: Some(file.path().to_path_buf()),
        max_addresses: Expander::DEFAULT_MAX_ADDRESSES,
        output: OutputFormat::Plain,
    };
    assert!(cmd.execute(true).is_ok());
}

#[test]
fn expand_command_propagates_cap_errors() {
    let cmd = ExpandCommand {
        cidrs: vec!["10.0.0.0/8".to_string()],
        file: None,
        max_addresses: 256,
        output: OutputFormat::Plain,
    };
    assert!(cmd.execute(true).is_err());
}

#[test]
fn info_command_summarizes_oversize_blocks() {
    // info never enumerates, so blocks beyond the expansion cap still work.
    let cmd = InfoCommand {
        cidrs: vec!["0.0.0.0/0".to_string(), "10.0.0.0/8".to_string()],
        file: None,
        output: OutputFormat::Json,
    };
    assert!(cmd.execute().is_ok());
}
