use dilate_othello::test_utils::run_perft;

#[test]
fn perft_6() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_7() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_8() {
    assert_eq!(run_perft(8), 390216);
}
