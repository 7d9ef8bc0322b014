use enigma::Decoder;
use tracing::Level;

#[test]
fn tracing_subscriber_does_not_change_output() {
    let decoder =
        Decoder::from_entries([(23, 'N'), (234, ' '), (89, 'H'), (78, 'Q'), (37, 'A')]).unwrap();
    let message = [1, 2, 3, 7, 3, 2, 3, 7, 2, 3, 4, 8, 9, 7, 8];

    let silent = decoder.decode(&message).unwrap();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();
    let traced = tracing::subscriber::with_default(subscriber, || decoder.decode(&message).unwrap());

    assert_eq!(silent, "1N73N7 HQ");
    assert_eq!(traced, silent);
}
