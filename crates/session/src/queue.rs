//! Card queue with successive-relearning re-queues.

use std::collections::BTreeMap;

use battle_core::CardId;

/// Cards of one encounter, in answer order.
///
/// Missed cards are appended to the end again, at most `max_requeues` times
/// per card identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardQueue {
    cards: Vec<CardId>,
    requeues: BTreeMap<CardId, u32>,
}

impl CardQueue {
    pub fn new(cards: Vec<CardId>) -> Self {
        Self {
            cards,
            requeues: BTreeMap::new(),
        }
    }

    /// Card at `index`, if the queue is that long.
    pub fn get(&self, index: u32) -> Option<&CardId> {
        self.cards.get(index as usize)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// How often `card` has been re-queued so far.
    pub fn requeue_count(&self, card: &CardId) -> u32 {
        self.requeues.get(card).copied().unwrap_or(0)
    }

    /// Appends `card` to the end unless it already hit the cap.
    ///
    /// Returns whether the card was appended.
    pub fn requeue(&mut self, card: &CardId, max_requeues: u32) -> bool {
        let count = self.requeues.entry(card.clone()).or_insert(0);
        if *count >= max_requeues {
            return false;
        }
        *count += 1;
        self.cards.push(card.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requeue_is_capped_per_card() {
        let card = CardId::from("mitochondria");
        let mut queue = CardQueue::new(vec![card.clone(), CardId::from("ribosome")]);

        assert!(queue.requeue(&card, 2));
        assert!(queue.requeue(&card, 2));
        assert!(!queue.requeue(&card, 2));

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.requeue_count(&card), 2);
        assert_eq!(queue.get(3), Some(&card));
        assert_eq!(queue.requeue_count(&CardId::from("ribosome")), 0);
    }
}
