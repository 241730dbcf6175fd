use super::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn run(marquee: &mut Marquee, ticks: usize) -> Vec<(String, Duration)> {
    (0..ticks)
        .map(|_| {
            let frame = marquee.tick();
            (frame.text, frame.delay)
        })
        .collect()
}

#[test]
fn rejects_empty_phrase_list() {
    let phrases: [&str; 0] = [];
    assert_eq!(
        Marquee::new(phrases, Timing::default()).unwrap_err(),
        MarqueeError::NoPhrases
    );
}

#[test]
fn rejects_empty_phrase() {
    assert_eq!(
        Marquee::new(["ok", ""], Timing::default()).unwrap_err(),
        MarqueeError::EmptyPhrase { index: 1 }
    );
}

#[test]
fn two_phrase_cycle_is_deterministic() {
    let mut marquee = Marquee::new(["A", "BB"], Timing::default()).unwrap();
    let frames = run(&mut marquee, 7);
    let expected = vec![
        ("A".to_owned(), ms(1200)),
        (String::new(), ms(80)),
        ("B".to_owned(), ms(80)),
        ("BB".to_owned(), ms(1200)),
        ("B".to_owned(), ms(35)),
        (String::new(), ms(80)),
        ("A".to_owned(), ms(1200)),
    ];
    assert_eq!(frames, expected);
}

#[test]
fn wraps_back_to_first_phrase() {
    let mut marquee = Marquee::new(["A", "BB"], Timing::default()).unwrap();
    run(&mut marquee, 6);
    assert_eq!(marquee.phrase_index(), 0);
    assert_eq!(marquee.char_index(), 0);
    assert_eq!(marquee.phase(), Phase::Growing);
}

#[test]
fn char_index_stays_within_phrase_bounds() {
    let mut marquee = Marquee::new(["abc", "de", "f"], Timing::default()).unwrap();
    let lens = [3, 2, 1];
    for _ in 0..200 {
        marquee.tick();
        assert!(marquee.phrase_index() < lens.len());
        assert!(marquee.char_index() <= lens[marquee.phrase_index()]);
    }
}

#[test]
fn slices_by_character_not_byte() {
    let mut marquee = Marquee::new(["héllo ✓"], Timing::default()).unwrap();
    let texts: Vec<String> = run(&mut marquee, 7).into_iter().map(|(t, _)| t).collect();
    assert_eq!(texts[1], "hé");
    assert_eq!(texts[6], "héllo ✓");
}

#[test]
fn timing_comes_from_config() {
    let config = crate::config::MarqueeConfig {
        phrases: vec!["xy".to_owned()],
        type_delay_ms: 10,
        erase_delay_ms: 5,
        pause_ms: 100,
    };
    let mut marquee = Marquee::from_config(&config).unwrap();
    let delays: Vec<Duration> = run(&mut marquee, 4).into_iter().map(|(_, d)| d).collect();
    assert_eq!(delays, vec![ms(10), ms(100), ms(5), ms(10)]);
}
