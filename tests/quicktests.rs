use linked_bst::linked::Tree;

quickcheck::quickcheck! {
    fn from_parallel_equals_sequential_inserts(pairs: Vec<(i8, i8)>) -> bool {
        let (keys, values): (Vec<_>, Vec<_>) = pairs.iter().cloned().unzip();
        let bulk = Tree::from_parallel(keys, values);

        let mut seq = Tree::new();
        for (k, v) in pairs {
            seq.insert(k, v);
        }

        bulk.len() == seq.len() && bulk.to_string() == seq.to_string()
    }
}

quickcheck::quickcheck! {
    fn iter_yields_keys_in_non_decreasing_order(pairs: Vec<(i8, i8)>) -> bool {
        let tree: Tree<i8, i8> = pairs.into_iter().collect();
        let keys: Vec<i8> = tree.iter().map(|(k, _)| *k).collect();

        keys.windows(2).all(|w| w[0] <= w[1])
    }
}

quickcheck::quickcheck! {
    fn rendered_size_matches_len(pairs: Vec<(i8, i8)>) -> bool {
        let tree: Tree<i8, i8> = pairs.into_iter().collect();

        tree.to_string()
            .starts_with(&format!("<BinaryTree> size: {} values: [ ", tree.len()))
    }
}
