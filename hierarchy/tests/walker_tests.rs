//! Superclass chain, interface lattice and ancestor walks over a small
//! JVM-like hierarchy.

use pretty_assertions::assert_eq;
use typegraph_hierarchy::{HierarchyWalker, SharedSink, VisitFlow, WalkOutcome, collect};
use typegraph_types::{ClassRef, ClassTable, TypeHost};

// ============================================================================
// Fixture
// ============================================================================

/// ```text
/// class A                      interface B
/// enum C                       class D extends A
/// interface E                  interface F extends E
/// class G implements E         class H implements F, E
/// interface I extends F, E
/// ```
struct Fixture {
    table: ClassTable,
    a: ClassRef,
    b: ClassRef,
    c: ClassRef,
    d: ClassRef,
    e: ClassRef,
    f: ClassRef,
    g: ClassRef,
    h: ClassRef,
    i: ClassRef,
}

impl Fixture {
    fn new() -> Self {
        let mut table = ClassTable::new();
        let a = table.class("A").declare().unwrap();
        let b = table.interface("B").declare().unwrap();
        let c = table.enum_type("C").declare().unwrap();
        let d = table.class("D").extends(&a).declare().unwrap();
        let e = table.interface("E").declare().unwrap();
        let f = table.interface("F").extends(&e).declare().unwrap();
        let g = table.class("G").implements(&e).declare().unwrap();
        let h = table
            .class("H")
            .implements(&f)
            .implements(&e)
            .declare()
            .unwrap();
        let i = table
            .interface("I")
            .extends(&f)
            .extends(&e)
            .declare()
            .unwrap();
        Self {
            table,
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
        }
    }

    fn walker(&self) -> HierarchyWalker<'_, ClassTable> {
        HierarchyWalker::new(&self.table)
    }

    fn enum_class(&self) -> ClassRef {
        self.table.superclass(&self.c).unwrap()
    }
}

// ============================================================================
// Superclass chain
// ============================================================================

#[test]
fn test_single_class_superclass() {
    let fx = Fixture::new();
    assert_eq!(fx.walker().superclasses(&fx.a, true), vec![fx.a.clone()]);
}

#[test]
fn test_single_class_superclass_excluded() {
    let fx = Fixture::new();
    assert_eq!(fx.walker().superclasses(&fx.a, false), Vec::<ClassRef>::new());
}

#[test]
fn test_interface_has_no_superclasses() {
    let fx = Fixture::new();
    assert_eq!(fx.walker().superclasses(&fx.b, true), Vec::<ClassRef>::new());
}

#[test]
fn test_enum_superclasses() {
    let fx = Fixture::new();
    assert_eq!(
        fx.walker().superclasses(&fx.c, true),
        vec![fx.c.clone(), fx.enum_class()]
    );
}

#[test]
fn test_superclasses() {
    let fx = Fixture::new();
    assert_eq!(
        fx.walker().superclasses(&fx.d, true),
        vec![fx.d.clone(), fx.a.clone()]
    );
}

// ============================================================================
// Interface lattice
// ============================================================================

#[test]
fn test_single_interface_interfaces() {
    let fx = Fixture::new();
    assert_eq!(fx.walker().interfaces(&fx.b, true), vec![fx.b.clone()]);
    assert_eq!(fx.walker().interfaces(&fx.b, false), Vec::<ClassRef>::new());
}

#[test]
fn test_interfaces_of_f() {
    let fx = Fixture::new();
    assert_eq!(
        fx.walker().interfaces(&fx.f, true),
        vec![fx.f.clone(), fx.e.clone()]
    );
    assert_eq!(fx.walker().interfaces(&fx.f, false), vec![fx.e.clone()]);
}

#[test]
fn test_class_is_never_its_own_interface() {
    let fx = Fixture::new();
    assert_eq!(fx.walker().interfaces(&fx.g, true), vec![fx.e.clone()]);
    assert_eq!(fx.walker().interfaces(&fx.g, false), vec![fx.e.clone()]);
}

#[test]
fn test_diamond_is_visited_once() {
    let fx = Fixture::new();
    let expected = vec![fx.f.clone(), fx.e.clone()];
    assert_eq!(fx.walker().interfaces(&fx.h, true), expected);
    assert_eq!(fx.walker().interfaces(&fx.h, false), expected);
}

#[test]
fn test_interfaces_of_i() {
    let fx = Fixture::new();
    assert_eq!(
        fx.walker().interfaces(&fx.i, true),
        vec![fx.i.clone(), fx.f.clone(), fx.e.clone()]
    );
    assert_eq!(
        fx.walker().interfaces(&fx.i, false),
        vec![fx.f.clone(), fx.e.clone()]
    );
}

// ============================================================================
// All ancestors
// ============================================================================

#[test]
fn test_all_ancestors_of_class_with_diamond() {
    let fx = Fixture::new();
    assert_eq!(
        fx.walker().all_ancestors(&fx.h, true),
        vec![fx.h.clone(), fx.f.clone(), fx.e.clone()]
    );
    assert_eq!(
        fx.walker().all_ancestors(&fx.h, false),
        vec![fx.f.clone(), fx.e.clone()]
    );
}

#[test]
fn test_all_ancestors_of_interface() {
    let fx = Fixture::new();
    assert_eq!(
        fx.walker().all_ancestors(&fx.i, true),
        vec![fx.i.clone(), fx.f.clone(), fx.e.clone()]
    );
}

#[test]
fn test_all_ancestors_of_subclass() {
    let fx = Fixture::new();
    assert_eq!(
        fx.walker().all_ancestors(&fx.d, true),
        vec![fx.d.clone(), fx.a.clone()]
    );
}

#[test]
fn test_walks_are_idempotent() {
    let fx = Fixture::new();
    let walker = fx.walker();
    let first = walker.all_ancestors(&fx.h, true);
    let second = walker.all_ancestors(&fx.h, true);
    assert_eq!(first, second);
}

// ============================================================================
// Early termination
// ============================================================================

/// Visitor that stops on the `n`th element and records what it saw.
fn stop_at(n: usize, seen: &mut Vec<ClassRef>) -> impl FnMut(ClassRef) -> VisitFlow + '_ {
    move |ty| {
        seen.push(ty);
        VisitFlow::from(seen.len() < n)
    }
}

#[test]
fn test_chain_stops_on_second_node() {
    let mut table = ClassTable::new();
    let a = table.class("A").declare().unwrap();
    let b = table.class("B").extends(&a).declare().unwrap();
    let c = table.class("C").extends(&b).declare().unwrap();
    let walker = HierarchyWalker::new(&table);

    let mut seen = Vec::new();
    let outcome = walker.walk_superclass_chain(&c, true, &mut stop_at(2, &mut seen));
    assert_eq!(outcome, WalkOutcome::Stopped);
    assert_eq!(seen, vec![c, b]);
}

#[test]
fn test_lattice_stops_on_second_node() {
    let fx = Fixture::new();
    let mut seen = Vec::new();
    let outcome = fx
        .walker()
        .walk_interface_lattice(&fx.i, true, &mut stop_at(2, &mut seen));
    assert_eq!(outcome, WalkOutcome::Stopped);
    assert_eq!(seen, vec![fx.i.clone(), fx.f.clone()]);
}

#[test]
fn test_stop_in_chain_skips_lattice() {
    let fx = Fixture::new();
    let mut seen = Vec::new();
    let outcome = fx
        .walker()
        .walk_all_ancestors(&fx.h, true, &mut stop_at(1, &mut seen));
    assert_eq!(outcome, WalkOutcome::Stopped);
    assert_eq!(seen, vec![fx.h.clone()]);
}

#[test]
fn test_stop_inside_nested_lattice() {
    let mut table = ClassTable::new();
    let x = table.interface("X").declare().unwrap();
    let y = table.interface("Y").extends(&x).declare().unwrap();
    let z = table.interface("Z").declare().unwrap();
    let k = table
        .class("K")
        .implements(&y)
        .implements(&z)
        .declare()
        .unwrap();
    let walker = HierarchyWalker::new(&table);

    let mut seen = Vec::new();
    let outcome = walker.walk_interface_lattice(&k, false, &mut stop_at(2, &mut seen));
    assert_eq!(outcome, WalkOutcome::Stopped);
    assert_eq!(seen, vec![y, x]);
}

#[test]
fn test_stop_in_lattice_after_chain_completes() {
    let mut table = ClassTable::new();
    let x = table.interface("X").declare().unwrap();
    let y = table.interface("Y").extends(&x).declare().unwrap();
    let z = table.interface("Z").declare().unwrap();
    let a = table
        .class("A")
        .implements(&y)
        .implements(&z)
        .declare()
        .unwrap();
    let walker = HierarchyWalker::new(&table);

    let mut seen = Vec::new();
    let outcome = walker.walk_all_ancestors(&a, true, &mut stop_at(3, &mut seen));
    assert_eq!(outcome, WalkOutcome::Stopped);
    assert_eq!(seen, vec![a, y, x]);
}

#[test]
fn test_completed_walk_reports_completed() {
    let fx = Fixture::new();
    let mut count = 0;
    let outcome = fx.walker().walk_all_ancestors(&fx.i, true, &mut |_: ClassRef| {
        count += 1;
        VisitFlow::Continue
    });
    assert_eq!(outcome, WalkOutcome::Completed);
    assert_eq!(count, 3);
}

// ============================================================================
// Collectors
// ============================================================================

#[test]
fn test_collect_with_first_interface() {
    let fx = Fixture::new();
    let walker = fx.walker();
    let first = collect::collect_with(
        None,
        |slot: &mut Option<ClassRef>, ty| {
            *slot = Some(ty);
            false
        },
        |v| walker.walk_interface_lattice(&fx.h, false, v),
    );
    assert_eq!(first, Some(fx.f.clone()));
}

#[test]
fn test_concurrent_walks_feed_one_sink() {
    let fx = Fixture::new();
    let walker = fx.walker();
    let sink = SharedSink::new();

    std::thread::scope(|scope| {
        for start in [&fx.h, &fx.i, &fx.d] {
            let sink = &sink;
            scope.spawn(move || {
                collect::feed_sink(sink, |v| walker.walk_all_ancestors(start, true, v))
            });
        }
    });

    let mut names: Vec<String> = sink.into_vec().iter().map(ToString::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        ["A", "D", "E", "E", "F", "F", "H", "I"]
    );
}

#[test]
fn test_subtype_checks() {
    let fx = Fixture::new();
    let walker = fx.walker();

    assert!(walker.is_subtype_of(&fx.h, &fx.e));
    assert!(walker.is_subtype_of(&fx.i, &fx.e));
    assert!(walker.is_subtype_of(&fx.d, &fx.a));
    assert!(walker.is_subtype_of(&fx.c, &fx.enum_class()));
    assert!(walker.is_subtype_of(&fx.b, &fx.table.object()));
    assert!(!walker.is_subtype_of(&fx.g, &fx.f));
    assert!(!walker.is_subtype_of(&fx.a, &fx.d));
}
