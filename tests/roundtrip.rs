use cipherkit::cipher::{self, playfair};
use cipherkit::{Key, Matrix};
use proptest::prelude::*;

#[test]
fn named_vectors_through_dispatch() {
    let caesar = Key::caesar(3).unwrap();
    assert_eq!(cipher::encrypt(&caesar, "HELLO").unwrap(), "KHOOR");
    assert_eq!(cipher::decrypt(&caesar, "KHOOR").unwrap(), "HELLO");

    let affine = Key::affine(5, 8).unwrap();
    assert_eq!(cipher::encrypt(&affine, "HELLO").unwrap(), "RCLLA");

    let vigenere = Key::vigenere("LEMON").unwrap();
    assert_eq!(
        cipher::encrypt(&vigenere, "ATTACKATDAWN").unwrap(),
        "LXFOPVEFRNHR"
    );

    let rail_fence = Key::rail_fence(3).unwrap();
    assert_eq!(
        cipher::encrypt(&rail_fence, "WEAREDISCOVEREDFLEEATONCE").unwrap(),
        "WECRLTEERDSOEEFEAOCAIVDEN"
    );

    let hill = Key::hill(Matrix::new(vec![vec![3, 3], vec![2, 5]]).unwrap()).unwrap();
    let ct = cipher::encrypt(&hill, "HELP").unwrap();
    assert_eq!(cipher::decrypt(&hill, &ct).unwrap(), "HELP");
}

#[test]
fn transposition_key_encodings_are_equivalent() {
    let from_keyword = Key::row_transposition_keyword("ZEBRAS").unwrap();
    let explicit = Key::row_transposition_order(&[6, 3, 2, 4, 1, 5]).unwrap();
    let text = "WEAREDISCOVEREDFLEEATONCE";
    assert_eq!(
        cipher::encrypt(&from_keyword, text).unwrap(),
        cipher::encrypt(&explicit, text).unwrap()
    );
}

#[test]
fn keys_roundtrip_through_json() {
    let keys = [
        Key::caesar(3).unwrap(),
        Key::vigenere("LEMON").unwrap(),
        Key::hill(Matrix::new(vec![vec![3, 3], vec![2, 5]]).unwrap()).unwrap(),
        Key::row_transposition_keyword("ZEBRAS").unwrap(),
    ];
    for key in &keys {
        let json = serde_json::to_string(key).unwrap();
        let restored: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, key);
        assert_eq!(
            cipher::encrypt(&restored, "ROUNDTRIP").unwrap(),
            cipher::encrypt(key, "ROUNDTRIP").unwrap()
        );
    }
}

fn affine_units() -> impl Strategy<Value = i64> {
    prop::sample::select(vec![1i64, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25])
}

proptest! {
    #[test]
    fn caesar_roundtrips(text in "[A-Z]{0,40}", shift in 0u8..26) {
        let key = Key::caesar(shift).unwrap();
        let ct = cipher::encrypt(&key, &text).unwrap();
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), text);
    }

    #[test]
    fn affine_roundtrips(text in "[A-Z]{0,40}", a in affine_units(), b in 0i64..26) {
        let key = Key::affine(a, b).unwrap();
        let ct = cipher::encrypt(&key, &text).unwrap();
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), text);
    }

    #[test]
    fn vigenere_roundtrips(text in "[A-Z]{0,40}", keyword in "[A-Z]{1,12}") {
        let key = Key::vigenere(&keyword).unwrap();
        let ct = cipher::encrypt(&key, &text).unwrap();
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), text);
    }

    #[test]
    fn playfair_roundtrips_to_preprocessed_text(
        text in "[A-Za-z0-9 ]{0,40}",
        keyword in "[A-Z]{1,12}",
    ) {
        let key = Key::playfair(&keyword).unwrap();
        let ct = cipher::encrypt(&key, &text).unwrap();
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), playfair::preprocess(&text));
    }

    #[test]
    fn hill_2x2_roundtrips_with_padding(
        text in "[A-Z]{0,40}",
        entries in prop::collection::vec(0i64..26, 4),
    ) {
        let matrix = Matrix::new(vec![
            vec![entries[0], entries[1]],
            vec![entries[2], entries[3]],
        ]).unwrap();
        prop_assume!(Key::hill(matrix.clone()).is_ok());
        let key = Key::hill(matrix).unwrap();

        let ct = cipher::encrypt(&key, &text).unwrap();
        let mut expected = text.clone();
        while expected.len() % 2 != 0 {
            expected.push('X');
        }
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), expected);
    }

    #[test]
    fn hill_3x3_roundtrips_with_padding(
        text in "[A-Z]{0,30}",
        entries in prop::collection::vec(0i64..26, 9),
    ) {
        let matrix = Matrix::new(entries.chunks(3).map(<[i64]>::to_vec).collect()).unwrap();
        prop_assume!(Key::hill(matrix.clone()).is_ok());
        let key = Key::hill(matrix).unwrap();

        let ct = cipher::encrypt(&key, &text).unwrap();
        let mut expected = text.clone();
        while expected.len() % 3 != 0 {
            expected.push('X');
        }
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), expected);
    }

    #[test]
    fn rail_fence_roundtrips(text in "[A-Z ]{0,60}", rails in 1usize..9) {
        let key = Key::rail_fence(rails).unwrap();
        let ct = cipher::encrypt(&key, &text).unwrap();
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), text);
    }

    #[test]
    fn transposition_roundtrips(text in "[A-Z ]{0,60}", keyword in "[A-Z]{1,9}") {
        let key = Key::row_transposition_keyword(&keyword).unwrap();
        let ct = cipher::encrypt(&key, &text).unwrap();
        prop_assert_eq!(cipher::decrypt(&key, &ct).unwrap(), text);
    }
}
