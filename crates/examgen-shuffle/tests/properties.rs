//! Property tests for the shuffle invariants.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use examgen_model::{Item, ItemBank, ShuffleOptions, classify};
use examgen_shuffle::generate_with;

/// One generated row: question body, option bodies, index of the correct
/// option, and per-option pin flags.
type RawRow = (String, Vec<String>, usize, Vec<bool>);

fn arb_bank() -> impl Strategy<Value = (ItemBank, i64)> {
    (1usize..6, 2usize..6).prop_flat_map(|(rows, cols)| {
        let row = (
            "[a-z]{1,8}",
            prop::collection::vec("[a-z]{1,8}", cols),
            0..cols,
            prop::collection::vec(any::<bool>(), cols),
        );
        (prop::collection::vec(row, rows), 0..=(cols as i64))
    })
    .prop_map(|(raw_rows, pinned_tail): (Vec<RawRow>, i64)| {
        let items = raw_rows
            .into_iter()
            .enumerate()
            .map(|(row_idx, (question, bodies, correct, pins))| {
                let options = bodies
                    .into_iter()
                    .enumerate()
                    .map(|(idx, mut cell)| {
                        if idx == correct {
                            cell.push('#');
                        }
                        if pins[idx] {
                            cell.push('%');
                        }
                        cell
                    })
                    .collect();
                // Row index makes questions unique so shuffled rows can be
                // matched back to their originals.
                Item::new(format!("{question}{row_idx}"), options)
            })
            .collect();
        (ItemBank::try_new(items).unwrap(), pinned_tail)
    })
}

fn clean_row(item: &Item) -> (String, Vec<String>) {
    (
        classify(&item.question).clean,
        item.options.iter().map(|o| classify(o).clean).collect(),
    )
}

proptest! {
    #[test]
    fn shuffle_preserves_shape_and_content((bank, pinned_tail) in arb_bank(), seed in any::<u64>()) {
        let original = bank.clone();
        let options = ShuffleOptions::new().with_answers(true).with_pinned_tail(pinned_tail);
        let (exam, key) = generate_with(bank, &options, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(exam.len(), original.len());
        prop_assert_eq!(exam.option_count(), original.option_count());
        prop_assert_eq!(key.len(), original.len());

        for shuffled in exam.items() {
            let source = original
                .items()
                .iter()
                .find(|item| classify(&item.question).clean == shuffled.question)
                .expect("every shuffled row comes from the bank");
            let (_, source_options) = clean_row(source);

            // Same options, possibly reordered.
            let mut got = shuffled.options.clone();
            let mut want = source_options.clone();
            got.sort_unstable();
            want.sort_unstable();
            prop_assert_eq!(&got, &want);

            // Pinned options and the fixed tail keep their slots.
            let cols = source.options.len();
            let eligible = cols - pinned_tail as usize;
            for (idx, cell) in source.options.iter().enumerate() {
                if classify(cell).is_pinned || idx >= eligible {
                    prop_assert_eq!(&shuffled.options[idx], &source_options[idx]);
                }
            }
        }

        // The key names the slot where each row's marked option landed.
        for (row, shuffled) in exam.items().iter().enumerate() {
            let source = original
                .items()
                .iter()
                .find(|item| classify(&item.question).clean == shuffled.question)
                .unwrap();
            let marked = source
                .options
                .iter()
                .find(|cell| classify(cell).is_correct)
                .unwrap();
            let letter = key.letter(row).unwrap();
            let idx = (letter as u8 - b'a') as usize;
            prop_assert_eq!(&shuffled.options[idx], &classify(marked).clean);
        }
    }

    #[test]
    fn answer_order_survives_when_shuffling_is_off((bank, _) in arb_bank(), seed in any::<u64>()) {
        let original = bank.clone();
        let options = ShuffleOptions::default();
        let (exam, _) = generate_with(bank, &options, &mut StdRng::seed_from_u64(seed)).unwrap();

        for shuffled in exam.items() {
            let source = original
                .items()
                .iter()
                .find(|item| classify(&item.question).clean == shuffled.question)
                .unwrap();
            let (_, source_options) = clean_row(source);
            prop_assert_eq!(&shuffled.options, &source_options);
        }
    }
}
