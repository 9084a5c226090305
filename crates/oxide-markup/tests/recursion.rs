//! Tests for the nesting limit.

use oxide_markup::{Args, Builder, MarkupError, Result, MAX_DEPTH};

fn nest_forever(b: &mut Builder<'_>, calls: &mut usize) -> Result<()> {
    *calls += 1;
    b.tag_with("input", Args::name("loop"), |b| nest_forever(b, calls))
}

fn nest(b: &mut Builder<'_>, levels: usize) -> Result<()> {
    if levels == 0 {
        return Ok(());
    }
    b.tag_with("div", (), |b| nest(b, levels - 1))
}

/// Deep recursion needs more stack than the default test thread has.
fn on_big_stack<F: FnOnce() + Send + 'static>(f: F) {
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(f)
        .expect("Failed to spawn test thread")
        .join()
        .expect("Test thread panicked");
}

#[test]
fn overflow_on_the_501st_nested_call() {
    on_big_stack(|| {
        let mut b = Builder::new();
        let mut calls = 0;
        let err = nest_forever(&mut b, &mut calls).unwrap_err();

        assert_eq!(calls, MAX_DEPTH + 1);
        match err {
            MarkupError::RecursionOverflow { tag, output } => {
                assert_eq!(tag, "input");
                assert_eq!(output.len(), MAX_DEPTH);
                assert!(output.iter().all(|unit| unit == r#"<input name="loop">"#));
            }
            other => panic!("Expected RecursionOverflow, got {other:?}"),
        }
        assert_eq!(b.depth(), 0);
    });
}

#[test]
fn nesting_up_to_the_limit_succeeds() {
    on_big_stack(|| {
        let mut b = Builder::new();
        nest(&mut b, MAX_DEPTH).unwrap();
        assert_eq!(b.units().len(), 2 * MAX_DEPTH);
        assert_eq!(b.depth(), 0);

        let err = nest(&mut b, MAX_DEPTH + 1).unwrap_err();
        assert!(matches!(err, MarkupError::RecursionOverflow { .. }));
    });
}

#[test]
fn builder_is_reusable_after_overflow() {
    on_big_stack(|| {
        let mut b = Builder::new();
        let mut calls = 0;
        assert!(nest_forever(&mut b, &mut calls).is_err());

        b.clear();
        nest(&mut b, MAX_DEPTH).unwrap();
        assert_eq!(b.units().len(), 2 * MAX_DEPTH);
    });
}
