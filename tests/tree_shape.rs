//! Shape tests: verify the median split produces the documented
//! structure and logarithmic depth

use test_helpers::*;

use test_case::test_case;

#[test_case(1, 1; "single stream")]
#[test_case(2, 2; "two streams")]
#[test_case(3, 2; "three streams")]
#[test_case(7, 3; "seven streams")]
#[test_case(100, 7; "hundred streams")]
fn depth_is_logarithmic(count: u32, expected_depth: usize) {
    let ids: Vec<u32> = (1..=count).collect();
    let tree = tree_of_ids(&ids);

    assert_eq!(tree.len(), count as usize);
    assert_eq!(tree.depth(), expected_depth);
}

#[test]
fn four_streams_split_at_third_smallest() {
    // n = 4: index 4 / 2 = 2 picks the third-smallest ID as the root
    let tree = tree_of_ids(&[10, 20, 30, 40]);

    let root = tree.root().expect("tree is non-empty");
    assert_eq!(root.message_id(), 30);

    // Lower half [10, 20] rebuilds with the same rule: 20 on top
    let left = root.left().root().expect("left subtree is non-empty");
    assert_eq!(left.message_id(), 20);
    assert_eq!(left.left().root().unwrap().message_id(), 10);
    assert!(left.right().is_empty());

    // Upper half is the single ID 40
    let right = root.right().root().expect("right subtree is non-empty");
    assert_eq!(right.message_id(), 40);
    assert!(right.left().is_empty());
    assert!(right.right().is_empty());
}

#[test]
fn two_streams_lean_left() {
    // floor(2 / 2) = 1 puts the second ID on top and leaves the right
    // child empty
    let tree = tree_of_ids(&[5, 9]);

    let root = tree.root().unwrap();
    assert_eq!(root.message_id(), 9);
    assert_eq!(root.left().root().unwrap().message_id(), 5);
    assert!(root.right().is_empty());
}

#[test]
fn construction_is_deterministic() {
    let ids = [31, 2, 17, 90, 5, 44, 8];
    let first = tree_of_ids(&ids);
    let second = tree_of_ids(&ids);
    assert_eq!(first, second);
}

#[test]
fn display_marks_each_level() {
    let tree = tree_of_ids(&[10, 20, 30, 40]);
    let rendered = tree.to_string();
    assert_eq!(rendered, "30\n:   20\n:   :   10\n:   40\n");
}
