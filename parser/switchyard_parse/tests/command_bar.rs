//! End-to-end flows over the public surface: parse, canonicalize,
//! render, and the bounded-time guarantee of the colonstring progress
//! guard.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;
use switchyard_parse::{
    canonicalize_names, parse_colonstrings, parse_switches, Hunk, LiteralTag, Switch,
};

fn sw(name: &str, args: &[&str]) -> Switch {
    Switch {
        name: name.to_owned(),
        args: args.iter().map(|&a| a.to_owned()).collect(),
    }
}

fn hunk(key: &str, values: &[&str]) -> Hunk {
    Hunk {
        key: key.to_owned(),
        values: values.iter().map(|&v| v.to_owned()).collect(),
    }
}

fn aliases(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

#[test]
fn switches_parse_and_canonicalize() {
    let parsed = parse_switches("/coffee /milk soy /brand \u{201C}Blind Tiger\u{201D}");
    let Ok(mut switches) = parsed else {
        panic!("valid switch input should parse");
    };
    // Names arriving from looser sources may be cased arbitrarily.
    switches[0].name = "COFFEE".to_owned();
    canonicalize_names(&mut switches, &aliases(&[("coffee", "espresso")]));
    assert_eq!(
        switches,
        vec![
            sw("espresso", &[]),
            sw("milk", &["soy"]),
            sw("brand", &["Blind Tiger"]),
        ]
    );
}

#[test]
fn hunks_parse_and_canonicalize() {
    let mut tag = LiteralTag::new("other");
    let parsed = parse_colonstrings("URGENCY:high pls quux:\"Trail Mix\"", Some(&mut tag));
    let Some(mut hunks) = parsed else {
        panic!("colonstring input should parse");
    };
    canonicalize_names(&mut hunks, &aliases(&[("urgency", "priority")]));
    assert_eq!(
        hunks,
        vec![
            hunk("priority", &["high"]),
            hunk("other", &["pls"]),
            hunk("quux", &["Trail Mix"]),
        ]
    );
}

#[test]
fn rendered_switches_reparse_to_the_same_list() {
    let original = parse_switches("/brand \"Blind Tiger\" /temp hot /sugar");
    let Ok(switches) = original else {
        panic!("valid switch input should parse");
    };
    let rendered = switches
        .iter()
        .map(Switch::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(parse_switches(&rendered), Ok(switches));
}

#[test]
fn unmatched_garbage_without_fallback_terminates_in_bounded_time() {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let result = parse_colonstrings("foo:bar ??? baz:quux", None);
        tx.send(result).ok();
    });
    let outcome = rx.recv_timeout(Duration::from_secs(5));
    assert_eq!(outcome, Ok(None), "parser must abort instead of spinning");
    handle.join().ok();
}
