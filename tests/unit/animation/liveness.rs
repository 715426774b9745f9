use super::*;

#[test]
fn ids_are_unique_and_die_once() {
    let mut reg = LivenessRegistry::new();
    let a = reg.register();
    let b = reg.register();
    assert_ne!(a, b);
    assert_eq!(reg.len(), 2);

    assert!(reg.destroy(a));
    assert!(!reg.destroy(a));
    assert!(!reg.is_alive(a));
    assert!(reg.is_alive(b));

    let c = reg.register();
    assert_ne!(c, a);
    assert!(c.as_u64() > b.as_u64());
}
