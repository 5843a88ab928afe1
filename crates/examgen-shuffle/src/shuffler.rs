use rand::Rng;
use rand::seq::SliceRandom;

use examgen_model::{
    AnswerKey, ExamError, ItemBank, Result, ShuffleOptions, classify, position_letter,
    strip_markers,
};

/// Generate one exam variant using the process RNG.
///
/// See [`generate_with`] for the semantics; tests that need deterministic
/// permutations should pass a seeded RNG there instead.
pub fn generate(bank: ItemBank, options: &ShuffleOptions) -> Result<(ItemBank, AnswerKey)> {
    generate_with(bank, options, &mut rand::rng())
}

/// Generate one exam variant from `bank` with an injected RNG.
///
/// Item order is always shuffled. When `options.shuffle_answers` is set,
/// each item's options in the range `[0, option_count - pinned_tail)` are
/// permuted uniformly among the slots not held by a pinned (`%`) option;
/// the trailing `pinned_tail` options are never touched. The answer key is
/// read from the `#` markup after permutation, then all markup is stripped.
///
/// Parameter validation happens before the RNG is touched, so a rejected
/// configuration never yields partially shuffled output.
pub fn generate_with<R: Rng + ?Sized>(
    mut bank: ItemBank,
    options: &ShuffleOptions,
    rng: &mut R,
) -> Result<(ItemBank, AnswerKey)> {
    let pinned_tail = validated_pinned_tail(options, bank.option_count())?;

    bank.items_mut().shuffle(rng);

    if let Some(pinned) = pinned_tail {
        for item in bank.items_mut() {
            let eligible = item.options.len().saturating_sub(pinned);
            shuffle_unpinned(&mut item.options[..eligible], rng);
        }
    }

    let key = extract_answer_key(&bank)?;
    strip_bank(&mut bank);

    tracing::debug!(
        items = bank.len(),
        options_per_item = bank.option_count(),
        shuffle_answers = options.shuffle_answers,
        pinned_tail = options.pinned_tail,
        "generated exam variant"
    );

    Ok((bank, key))
}

/// Validate `pinned_tail`, returning it as a count, or `None` when answers
/// are not shuffled at all.
fn validated_pinned_tail(options: &ShuffleOptions, option_count: usize) -> Result<Option<usize>> {
    if !options.shuffle_answers {
        return Ok(None);
    }
    if options.pinned_tail < 0 {
        return Err(ExamError::invalid_parameter(options.pinned_tail));
    }
    let pinned = options.pinned_tail as usize;
    if pinned > option_count {
        return Err(ExamError::parameter_out_of_range(
            options.pinned_tail,
            option_count,
        ));
    }
    Ok(Some(pinned))
}

/// Permute the options not carrying the preserve marker uniformly among
/// their own slots, leaving pinned options where they are.
fn shuffle_unpinned<R: Rng + ?Sized>(options: &mut [String], rng: &mut R) {
    let movable: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, cell)| !classify(cell).is_pinned)
        .map(|(idx, _)| idx)
        .collect();

    let mut slots = movable.clone();
    slots.shuffle(rng);

    let values: Vec<String> = movable
        .iter()
        .map(|&idx| std::mem::take(&mut options[idx]))
        .collect();
    for (value, &slot) in values.into_iter().zip(slots.iter()) {
        options[slot] = value;
    }
}

fn extract_answer_key(bank: &ItemBank) -> Result<AnswerKey> {
    let mut letters = Vec::with_capacity(bank.len());
    for (row, item) in bank.items().iter().enumerate() {
        let mut marked = item
            .options
            .iter()
            .enumerate()
            .filter(|(_, cell)| classify(cell).is_correct)
            .map(|(idx, _)| idx);
        let first = marked.next().ok_or_else(|| ExamError::malformed_item(row))?;
        let extra = marked.count();
        if extra > 0 {
            tracing::warn!(
                row,
                marked = extra + 1,
                "multiple options marked correct, using the first"
            );
        }
        let letter = position_letter(first).ok_or(ExamError::TooManyOptions {
            row,
            count: item.options.len(),
        })?;
        letters.push(letter);
    }
    Ok(AnswerKey::new(letters))
}

fn strip_bank(bank: &mut ItemBank) {
    for item in bank.items_mut() {
        item.question = strip_markers(&item.question);
        for option in &mut item.options {
            *option = strip_markers(option);
        }
    }
}
