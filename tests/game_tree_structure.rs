use std::collections::HashSet;

use tictree::{GameTree, Position, Strategy, StrategyAssignment};

fn full_tree(strategy: Strategy) -> GameTree {
    GameTree::new(9, strategy)
}

/// Number of parent-child links leaving each level
fn links_per_level(tree: &GameTree) -> Vec<usize> {
    tree.links()
        .iter()
        .map(|level| level.iter().map(|children| children.len()).sum())
        .collect()
}

mod level_sizes {
    use super::*;

    #[test]
    fn legal_tree() {
        let tree = full_tree(Strategy::Legal);
        assert_eq!(
            tree.level_sizes(),
            vec![1, 3, 12, 38, 108, 174, 204, 153, 57, 15]
        );
        assert_eq!(
            links_per_level(&tree),
            vec![3, 12, 66, 198, 492, 584, 526, 181, 34]
        );
        assert_eq!(tree.link_count(), 2096);
    }

    #[test]
    fn all_tree_keeps_playing_after_wins() {
        let tree = full_tree(Strategy::All);
        assert_eq!(
            tree.level_sizes(),
            vec![1, 3, 12, 38, 108, 174, 228, 174, 89, 23]
        );
        assert_eq!(tree.link_count(), 2480);
    }

    #[test]
    fn winblock_tree() {
        let tree = full_tree(Strategy::WinBlock);
        assert_eq!(
            tree.level_sizes(),
            vec![1, 3, 12, 38, 54, 88, 109, 96, 38, 9]
        );
        assert_eq!(tree.link_count(), 734);
    }

    #[test]
    fn heuristic_tree_is_nearly_a_line() {
        let tree = full_tree(Strategy::Heuristic);
        assert_eq!(tree.level_sizes(), vec![1, 1, 1, 2, 1, 1, 1, 1, 1, 1]);
        assert_eq!(tree.link_count(), 11);
    }

    #[test]
    fn rational_tree() {
        let tree = full_tree(Strategy::Rational);
        assert_eq!(tree.level_sizes(), vec![1, 3, 5, 16, 18, 23, 24, 22, 10, 3]);
        assert_eq!(links_per_level(&tree), vec![3, 5, 19, 27, 39, 37, 45, 25, 10]);
        assert_eq!(tree.link_count(), 210);
    }

    #[test]
    fn all_and_legal_agree_before_any_win() {
        let all = GameTree::new(5, Strategy::All);
        let legal = GameTree::new(5, Strategy::Legal);
        assert_eq!(all.level_sizes(), legal.level_sizes());
        assert_eq!(all.links(), legal.links());
    }
}

mod invariants {
    use super::*;

    #[test]
    fn levels_hold_distinct_canonical_positions() {
        for strategy in Strategy::ALL {
            let tree = GameTree::new(6, strategy);
            for (level, positions) in tree.levels().iter().enumerate() {
                let distinct: HashSet<&Position> = positions.iter().collect();
                assert_eq!(distinct.len(), positions.len(), "{strategy} level {level}");
                assert!(positions.iter().all(Position::is_canonical));
                assert!(positions.iter().all(|p| p.occupied_count() == level));
            }
        }
    }

    #[test]
    fn links_point_at_existing_children() {
        let tree = full_tree(Strategy::WinBlock);
        assert_eq!(tree.levels().len(), tree.links().len() + 1);
        for (level, links) in tree.links().iter().enumerate() {
            assert_eq!(links.len(), tree.levels()[level].len());
            let next = tree.levels()[level + 1].len();
            let mut reached = HashSet::new();
            for targets in links {
                assert!(targets.iter().all(|&t| t < next));
                reached.extend(targets.iter().copied());
            }
            // Every child was produced by some parent.
            assert_eq!(reached.len(), next);
        }
    }

    #[test]
    fn every_legal_move_is_linked() {
        let tree = GameTree::new(4, Strategy::Legal);
        for (level, positions) in tree.levels().iter().enumerate().take(4) {
            for (index, parent) in positions.iter().enumerate() {
                let children = tree.links_from(level, index).unwrap();
                for square in parent.legal_moves(Strategy::Legal) {
                    let mut child = *parent;
                    child.apply_move(square).unwrap();
                    let child = child.canonical();
                    let target = tree.levels()[level + 1]
                        .iter()
                        .position(|p| *p == child)
                        .unwrap();
                    assert!(children.contains(&target));
                }
            }
        }
    }

    #[test]
    fn rational_tree_never_reaches_a_win() {
        let tree = full_tree(Strategy::Rational);
        for positions in tree.levels() {
            assert!(positions.iter().all(|p| p.winner().is_none()));
        }
        assert!(tree.levels()[9].iter().all(Position::is_drawn));
    }
}

mod mixed_strategies {
    use super::*;

    #[test]
    fn rational_o_never_loses_to_legal_x() {
        let tree = GameTree::new(9, StrategyAssignment::new(Strategy::Legal, Strategy::Rational));
        for positions in tree.levels() {
            for position in positions {
                assert!(!position.has_won(tictree::Player::X), "{position}");
            }
        }
    }

    #[test]
    fn seeded_tree_grows_from_each_seed() {
        let seeds = vec![
            Position::from_moves(&[(1, 1)]).unwrap(),
            Position::from_moves(&[(0, 0)]).unwrap(),
        ];
        let tree = GameTree::with_seeds(1, seeds, Strategy::Legal);
        assert_eq!(tree.level_sizes()[0], 2);
        // Center opening has two replies, corner opening five; none shared.
        assert_eq!(tree.links_from(0, 0).map(|l| l.len()), Some(2));
        assert_eq!(tree.links_from(0, 1).map(|l| l.len()), Some(5));
        assert_eq!(tree.level_sizes()[1], 7);
    }
}
