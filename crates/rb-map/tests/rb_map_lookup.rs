use std::collections::BTreeMap;

use ropewalk_rb_map::RbMap;

#[test]
fn lookups_agree_with_btreemap() {
    // Deterministic pseudo-random key order.
    let mut expected = BTreeMap::new();
    let mut map = RbMap::new();
    let mut k: u64 = 7;
    for i in 0..500u64 {
        k = k.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let key = k % 200;
        expected.insert(key, i);
        map.set(key, i);
    }
    map.assert_valid().unwrap();
    assert_eq!(map.len(), expected.len());

    for key in 0..200u64 {
        assert_eq!(map.get(&key), expected.get(&key));
        assert_eq!(map.has(&key), expected.contains_key(&key));
    }
}

#[test]
fn string_keys() {
    let mut map = RbMap::new();
    for word in ["rope", "walk", "leaf", "node", "tree", "weight"] {
        map.set(word.to_string(), word.len());
    }
    map.assert_valid().unwrap();
    assert_eq!(map.get(&"weight".to_string()), Some(&6));
    assert_eq!(map.get(&"missing".to_string()), None);
}
