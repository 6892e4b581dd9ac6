//! The set rule and set search.
//!
//! Three cards form a set when, for every attribute, the number of distinct
//! values among them is 1 or 3. With three cards and three possible values
//! this is the same as "never exactly 2".

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardContent, CardId};
use crate::core::SET_SIZE;

/// Distinct value count per attribute, in (number, shape, shading, color) order.
#[must_use]
pub fn distinct_counts(contents: &[CardContent; SET_SIZE]) -> [usize; 4] {
    let indices: [[u8; 4]; SET_SIZE] = std::array::from_fn(|i| contents[i].indices());
    std::array::from_fn(|dim| {
        let (a, b, c) = (indices[0][dim], indices[1][dim], indices[2][dim]);
        match (a == b, b == c, a == c) {
            (true, true, _) => 1,
            (false, false, false) => 3,
            _ => 2,
        }
    })
}

/// Check whether three card faces form a set.
#[must_use]
pub fn is_valid_set(contents: &[CardContent; SET_SIZE]) -> bool {
    distinct_counts(contents).iter().all(|&count| count != 2)
}

/// Check whether three cards form a set.
#[must_use]
pub fn is_valid_card_set(cards: [&Card; SET_SIZE]) -> bool {
    is_valid_set(&cards.map(|card| card.content))
}

/// The unique face that completes a set with `a` and `b`.
///
/// Per attribute: equal values force the same value, differing values force
/// the remaining one. Both cases are `-(x + y) mod 3`.
#[must_use]
pub fn third_card(a: &CardContent, b: &CardContent) -> CardContent {
    let (x, y) = (a.indices(), b.indices());
    CardContent::from_indices(std::array::from_fn(|dim| (6 - x[dim] - y[dim]) % 3))
}

/// All sets among `cards`, each as ids in sequence order.
///
/// Runs in O(n^2): every pair determines its third card, which is looked up
/// by face.
#[must_use]
pub fn find_sets(cards: &[Card]) -> Vec<[CardId; SET_SIZE]> {
    let by_face: FxHashMap<CardContent, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| (card.content, i))
        .collect();

    let mut sets = Vec::new();
    for (i, first) in cards.iter().enumerate() {
        for (j, second) in cards.iter().enumerate().skip(i + 1) {
            let wanted = third_card(&first.content, &second.content);
            if let Some(&k) = by_face.get(&wanted) {
                if k > j {
                    sets.push([first.id, second.id, cards[k].id]);
                }
            }
        }
    }
    sets
}

/// Whether at least one set exists among `cards`.
#[must_use]
pub fn has_set(cards: &[Card]) -> bool {
    let by_face: FxHashMap<CardContent, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| (card.content, i))
        .collect();

    cards.iter().enumerate().any(|(i, first)| {
        cards.iter().enumerate().skip(i + 1).any(|(j, second)| {
            by_face
                .get(&third_card(&first.content, &second.content))
                .is_some_and(|&k| k > j)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{deck, Color, Number, Shading, Shape};

    fn face(number: Number, color: Color, shading: Shading, shape: Shape) -> CardContent {
        CardContent::new(number, shape, shading, color)
    }

    #[test]
    fn test_all_same_but_number() {
        let set = [
            face(Number::One, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Two, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Three, Color::Red, Shading::Solid, Shape::Diamond),
        ];
        assert!(is_valid_set(&set));
        assert_eq!(distinct_counts(&set), [3, 1, 1, 1]);
    }

    #[test]
    fn test_number_and_color_differ() {
        let set = [
            face(Number::One, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Two, Color::Green, Shading::Solid, Shape::Diamond),
            face(Number::Three, Color::Purple, Shading::Solid, Shape::Diamond),
        ];
        assert!(is_valid_set(&set));
    }

    #[test]
    fn test_everything_differs() {
        let set = [
            face(Number::One, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Two, Color::Green, Shading::Striped, Shape::Squiggle),
            face(Number::Three, Color::Purple, Shading::Open, Shape::Oval),
        ];
        assert!(is_valid_set(&set));
        assert_eq!(distinct_counts(&set), [3, 3, 3, 3]);
    }

    #[test]
    fn test_two_shadings_invalid() {
        let set = [
            face(Number::One, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Two, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Three, Color::Red, Shading::Striped, Shape::Diamond),
        ];
        assert!(!is_valid_set(&set));
        assert_eq!(distinct_counts(&set)[2], 2);
    }

    #[test]
    fn test_two_numbers_invalid() {
        let set = [
            face(Number::One, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Two, Color::Green, Shading::Solid, Shape::Diamond),
            face(Number::One, Color::Purple, Shading::Solid, Shape::Diamond),
        ];
        assert!(!is_valid_set(&set));
    }

    #[test]
    fn test_order_independent() {
        let a = face(Number::One, Color::Red, Shading::Solid, Shape::Diamond);
        let b = face(Number::Two, Color::Green, Shading::Solid, Shape::Oval);
        let c = face(Number::Three, Color::Purple, Shading::Solid, Shape::Squiggle);
        let bad = face(Number::Three, Color::Purple, Shading::Open, Shape::Squiggle);

        for perm in [[a, b, c], [a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            assert!(is_valid_set(&perm));
        }
        for perm in [[a, b, bad], [bad, a, b], [b, bad, a]] {
            assert!(!is_valid_set(&perm));
        }
    }

    #[test]
    fn test_third_card_completes_set() {
        let faces: Vec<_> = deck::universe().collect();
        for a in faces.iter().step_by(7) {
            for b in faces.iter().step_by(5) {
                if a == b {
                    continue;
                }
                let c = third_card(a, b);
                assert_ne!(&c, a);
                assert_ne!(&c, b);
                assert!(is_valid_set(&[*a, *b, c]));
            }
        }
    }

    #[test]
    fn test_third_card_of_same_face_is_itself() {
        let a = face(Number::Two, Color::Green, Shading::Open, Shape::Oval);
        assert_eq!(third_card(&a, &a), a);
    }

    #[test]
    fn test_find_sets_full_deck() {
        // 81 * 80 / 6 = 1080 sets in a full deck.
        let cards = deck::generate();
        let sets = find_sets(&cards);
        assert_eq!(sets.len(), 1080);
        assert!(has_set(&cards));

        for &ids in sets.iter().take(50) {
            let triple = ids.map(|id| &cards[id.raw() as usize]);
            assert!(is_valid_card_set(triple));
        }
    }

    #[test]
    fn test_find_sets_none() {
        // Four cards that agree on three attributes and use only two numbers.
        let cards: Vec<Card> = [
            face(Number::One, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::Two, Color::Red, Shading::Solid, Shape::Diamond),
            face(Number::One, Color::Green, Shading::Solid, Shape::Diamond),
            face(Number::Two, Color::Green, Shading::Solid, Shape::Diamond),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, content)| Card::new(CardId::new(i as u32), content))
        .collect();

        assert!(find_sets(&cards).is_empty());
        assert!(!has_set(&cards));
        assert!(!has_set(&[]));
    }
}
