use modal_options::ModalOptions;
use pretty_assertions::assert_eq;

fn keys(opts: &ModalOptions) -> Vec<&str> {
    opts.iter().map(|(k, _)| k).collect()
}

#[test]
fn default_width() {
    assert_eq!(ModalOptions::new().width, "50%");
    assert_eq!(ModalOptions::default().width(), modal_options::DEFAULT_WIDTH);
}

#[test]
fn set_signals_new_key() {
    let mut opts = ModalOptions::new();
    assert!(opts.set("k", 1_i32));
    assert!(!opts.set("k", 2_i32));
    assert!(!opts.set("k", "three"));
    assert_eq!(opts.len(), 1);
}

#[test]
fn overwrite_keeps_original_position() {
    let mut opts = ModalOptions::new();
    opts.set("a", 1_i32);
    opts.set("b", 2_i32);
    opts.set("c", 3_i32);
    opts.set("a", 10_i32);
    opts.set("b", String::from("two"));

    assert_eq!(keys(&opts), vec!["a", "b", "c"]);
    let (_, first) = opts.iter().next().unwrap();
    assert_eq!(first.downcast_ref::<i32>(), Some(&10));
}

#[test]
fn get_round_trip_and_fallbacks() {
    let mut opts = ModalOptions::new();
    opts.set("x", 42_i32);
    opts.set("s", "hello".to_string());

    assert_eq!(opts.get::<i32>("x"), 42);
    assert_eq!(opts.get::<i32>("s"), 0);
    assert_eq!(opts.get::<i32>("missing"), 0);
    assert_eq!(opts.get_ref::<String>("missing"), None);
    assert_eq!(opts.get_ref::<String>("s").map(String::as_str), Some("hello"));
}

#[test]
fn try_get_agrees_with_get() {
    let mut opts = ModalOptions::new();
    opts.set("n", 5_u64);
    opts.set("zero", 0_u64);
    opts.set("s", "5".to_string());

    for key in ["n", "zero", "s", "missing"] {
        let mut out = 77_u64;
        let found = opts.try_get::<u64>(key, &mut out);
        assert_eq!(found, opts.get_ref::<u64>(key).is_some(), "key {key}");
        assert_eq!(out, opts.get::<u64>(key), "key {key}");
    }
}

#[test]
fn absent_and_mismatched_look_alike_to_try_get() {
    let mut opts = ModalOptions::new();
    opts.set("s", "text".to_string());

    let mut a = 0_i32;
    let mut b = 0_i32;
    assert_eq!(opts.try_get("s", &mut a), opts.try_get("nope", &mut b));
    assert!(opts.contains_key("s"));
    assert!(!opts.contains_key("nope"));
}

#[test]
fn iteration_is_restartable() {
    let mut opts = ModalOptions::new();
    for (i, k) in ["a", "b", "c"].into_iter().enumerate() {
        opts.set(k, i);
    }
    let first: Vec<_> = (&opts).into_iter().map(|(k, _)| k.to_string()).collect();
    let second: Vec<_> = keys(&opts).into_iter().map(str::to_string).collect();
    assert_eq!(first, second);
    assert_eq!(opts.iter().len(), 3);
}

#[test]
fn custom_types_round_trip() {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Customer {
        id: u32,
        name: String,
    }

    let mut opts = ModalOptions::new();
    let c = Customer { id: 9, name: "Ada".into() };
    opts.set("customer", c.clone());
    assert_eq!(opts.get::<Customer>("customer"), c);
    assert_eq!(opts.get::<Customer>("other"), Customer::default());
}
