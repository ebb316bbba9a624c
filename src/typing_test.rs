use super::*;

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| (*p).to_owned()).collect()
}

#[test]
fn types_deletes_and_advances() {
    let mut writer = Typewriter::new(&phrases(&["abc", "de"]));

    let typed: Vec<TypingStep> = (0..3).filter_map(|_| writer.step()).collect();
    assert_eq!(typed.iter().map(|s| s.text.as_str()).collect::<Vec<_>>(), vec!["a", "ab", "abc"]);
    assert_eq!(typed[0].delay_ms, 100);
    assert_eq!(typed[2].delay_ms, 2000);
    assert!(writer.state().deleting);

    let deleted: Vec<TypingStep> = (0..3).filter_map(|_| writer.step()).collect();
    assert_eq!(deleted.iter().map(|s| s.text.as_str()).collect::<Vec<_>>(), vec!["ab", "a", ""]);
    assert_eq!(deleted[0].delay_ms, 50);
    assert_eq!(deleted[2].delay_ms, 500);

    assert_eq!(writer.state(), TypingState { phrase_index: 1, char_index: 0, deleting: false });
    assert_eq!(writer.step().map(|s| s.text), Some("d".to_owned()));
}

#[test]
fn wraps_from_last_phrase_to_first() {
    let mut writer = Typewriter::new(&phrases(&["x", "y"]));
    // "x": type, delete; "y": type, delete.
    for _ in 0..4 {
        writer.step();
    }
    assert_eq!(writer.state().phrase_index, 0);
    assert_eq!(writer.step().map(|s| s.text), Some("x".to_owned()));
}

#[test]
fn single_phrase_cycles_on_itself() {
    let mut writer = Typewriter::new(&phrases(&["hi"]));
    let texts: Vec<String> = (0..6).filter_map(|_| writer.step()).map(|s| s.text).collect();
    assert_eq!(texts, vec!["h", "hi", "h", "", "h", "hi"]);
}

#[test]
fn works_on_characters_not_bytes() {
    let mut writer = Typewriter::new(&phrases(&["né"]));
    assert_eq!(writer.step().map(|s| s.text), Some("n".to_owned()));
    assert_eq!(writer.step().map(|s| s.text), Some("né".to_owned()));
}

#[test]
fn empty_phrase_does_not_stall() {
    let mut writer = Typewriter::new(&phrases(&["", "ok"]));
    let first = writer.step().expect("step");
    assert_eq!(first.text, "");
    assert_eq!(first.delay_ms, 2000);
    let second = writer.step().expect("step");
    assert_eq!(second.delay_ms, 500);
    assert_eq!(writer.state().phrase_index, 1);
}

#[test]
fn no_phrases_never_starts() {
    let mut writer = Typewriter::new(&[]);
    assert_eq!(writer.step(), None);
}

#[test]
fn stop_halts_further_steps() {
    let mut writer = Typewriter::new(&phrases(&["abc"]));
    writer.step();
    writer.stop();
    assert!(writer.is_stopped());
    assert_eq!(writer.step(), None);
    assert_eq!(writer.state().char_index, 1);
}
