use folio_engine::{BarItem, ItemRange, PageSize, PageStateManager, paginate, slice};

#[test]
fn test_slices_reconstruct_items() {
    for len in 0..=35usize {
        let items: Vec<usize> = (0..len).collect();
        for size in 1..=8usize {
            let page_size = PageSize::new(size);
            let total_pages = page_size.total_pages(len);

            let mut rebuilt = Vec::new();
            for page in 1..=total_pages {
                let chunk = slice(&items, page, page_size);
                assert!(chunk.len() <= size);
                assert_eq!(chunk.is_empty(), items.is_empty());
                rebuilt.extend_from_slice(chunk);
            }
            assert_eq!(rebuilt, items, "len={len} size={size}");
        }
    }
}

#[test]
fn test_paginate_first_page() {
    let items: Vec<u32> = (0..25).collect();
    let view = paginate(&items, 1, 10);

    assert_eq!(view.items, &items[0..10]);
    assert_eq!(view.range, ItemRange::new(0, 10));
    assert_eq!(view.state.total_pages(), 3);
    assert_eq!(view.window.to_string(), "1 2 3");
}

#[test]
fn test_paginate_clamps_request() {
    let items: Vec<u32> = (0..25).collect();
    let view = paginate(&items, 5, 10);

    assert_eq!(view.position().current(), 3);
    assert_eq!(view.items, &items[20..25]);
    assert_eq!(view.range.to_string(), "21-25");

    let bar = view.bar.expect("three pages render a bar");
    assert_eq!(bar.previous, Some(2));
    assert_eq!(bar.next, None);
    assert_eq!(
        bar.items.last(),
        Some(&BarItem::Page {
            number: 3,
            active: true
        })
    );
}

#[test]
fn test_paginate_empty_list() {
    let items: Vec<String> = Vec::new();
    let view = paginate(&items, 3, 10);

    assert!(view.is_empty());
    assert_eq!(view.state.total_pages(), 1);
    assert_eq!(view.state.current_page(), 1);
    assert!(view.bar.is_none());
    assert_eq!(view.window.to_string(), "1");
}

#[test]
fn test_keyed_paginate_with_filter() {
    let names = ["ada", "alan", "barbara", "brian", "grace", "guido", "linus"];
    let mut manager = PageStateManager::<String>::keyed(names.len(), 2);
    manager.paginate(&names, 2, &[String::new()]);
    manager.set_page(4);
    assert_eq!(manager.view(&names).items, &["linus"]);

    let filter = "a".to_string();
    let filtered: Vec<&str> = names.iter().copied().filter(|n| n.contains(&filter)).collect();
    let view = manager.paginate(&filtered, 2, &[filter]);

    assert_eq!(view.state.current_page(), 1);
    assert_eq!(view.items, &["ada", "alan"]);
    assert_eq!(view.state.total_pages(), 3);
}

#[test]
fn test_view_serializes() {
    let items = vec!["a", "b", "c"];
    let view = paginate(&items, 2, 2);
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(value["items"], serde_json::json!(["c"]));
    assert_eq!(value["state"]["current_page"], 2);
    assert_eq!(value["range"]["start"], 2);
    assert_eq!(value["bar"]["previous"], 1);
    assert!(value["bar"]["next"].is_null());
}
