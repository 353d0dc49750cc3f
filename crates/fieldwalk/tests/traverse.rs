use core::any::Any;
use core::mem::offset_of;

use fieldwalk::derive::Visit;
use fieldwalk::fields::Fields;
use fieldwalk::info::{FieldInfo, Typed};
use fieldwalk::layout::LayoutCursor;
use fieldwalk::{Visitor, VisitorMut, visit_fields, visit_fields_mut};

#[test]
fn concatenates_members_in_declaration_order() {
    #[derive(Visit)]
    struct A {
        c: char,
        s: String,
        i: i32,
    }

    let a = A {
        c: 'c',
        s: "test".to_owned(),
        i: 42,
    };

    struct Concat(String);

    impl Visitor for Concat {
        fn visit<F: Any>(&mut self, value: &F, _info: &'static FieldInfo) {
            let value: &dyn Any = value;
            if let Some(c) = value.downcast_ref::<char>() {
                self.0.push_str(&format!("{c}, "));
            } else if let Some(s) = value.downcast_ref::<String>() {
                self.0.push_str(&format!("{s}, "));
            } else if let Some(i) = value.downcast_ref::<i32>() {
                self.0.push_str(&format!("{i}, "));
            } else {
                panic!("unexpected member type");
            }
        }
    }

    let mut out = Concat(String::new());
    visit_fields(&a, &mut out);

    assert_eq!(out.0, "c, test, 42, ");
}

#[test]
fn empty_struct_never_invokes_the_visitor() {
    #[derive(Visit)]
    struct Empty {}

    #[derive(Visit)]
    struct Unit;

    struct Bomb;

    impl Visitor for Bomb {
        fn visit<F: Any>(&mut self, _value: &F, _info: &'static FieldInfo) {
            panic!("the visitor must never run for an empty struct");
        }
    }

    visit_fields(&Empty {}, &mut Bomb);
    visit_fields(&Unit, &mut Bomb);

    assert_eq!(Empty::struct_info().field_len(), 0);
    assert_eq!(Unit::struct_info().field_len(), 0);
}

#[test]
fn overload_set_visitor_sees_each_member_once() {
    #[derive(Visit)]
    struct A {
        i: i32,
        s: String,
        c: char,
        v: Vec<i32>,
        d: f64,
        s2: String,
    }

    let mut a = A {
        i: 100,
        s: "hello".to_owned(),
        c: 'a',
        v: vec![3, 4, 5],
        d: 5.0,
        s2: "world".to_owned(),
    };

    struct Checker {
        idx: usize,
    }

    impl VisitorMut for Checker {
        fn visit<F: Any>(&mut self, value: &mut F, info: &'static FieldInfo) {
            assert_eq!(info.index(), self.idx);

            let value: &mut dyn Any = value;
            if let Some(i) = value.downcast_mut::<i32>() {
                assert_eq!(self.idx, 0);
                assert_eq!(*i, 100);
                *i = 42; // members can be modified
            } else if let Some(s) = value.downcast_mut::<String>() {
                match self.idx {
                    1 => assert_eq!(s.as_str(), "hello"),
                    5 => assert_eq!(s.as_str(), "world"),
                    idx => panic!("string member at unexpected position {idx}"),
                }
            } else if let Some(c) = value.downcast_mut::<char>() {
                assert_eq!(self.idx, 2);
                assert_eq!(*c, 'a');
            } else if let Some(v) = value.downcast_mut::<Vec<i32>>() {
                assert_eq!(self.idx, 3);
                assert_eq!(*v, [3, 4, 5]);
            } else if let Some(d) = value.downcast_mut::<f64>() {
                assert_eq!(self.idx, 4);
                assert_eq!(*d, 5.0);
            } else {
                panic!("unexpected member type");
            }

            self.idx += 1;
        }
    }

    let mut checker = Checker { idx: 0 };
    visit_fields_mut(&mut a, &mut checker);

    assert_eq!(checker.idx, 6);
    assert_eq!(a.i, 42);
}

#[test]
fn references_alias_the_live_members() {
    #[derive(Visit)]
    struct A {
        x: u64,
        y: String,
    }

    let a = A {
        x: 7,
        y: "y".to_owned(),
    };

    struct Addresses(Vec<usize>);

    impl Visitor for Addresses {
        fn visit<F: Any>(&mut self, value: &F, _info: &'static FieldInfo) {
            self.0.push(value as *const F as usize);
        }
    }

    let mut addresses = Addresses(Vec::new());
    visit_fields(&a, &mut addresses);

    assert_eq!(
        addresses.0,
        [
            (&a.x as *const u64) as usize,
            (&a.y as *const String) as usize,
        ]
    );
}

#[test]
fn field_info_matches_the_declaration() {
    #[derive(Visit)]
    #[allow(dead_code)]
    struct A {
        c: u8,
        s: u32,
        i: u16,
    }

    let info = A::struct_info();

    assert!(info.type_is::<A>());
    assert_eq!(info.field_len(), 3);
    assert_eq!(info.size(), size_of::<A>());
    assert_eq!(info.align(), align_of::<A>());

    let names: Vec<_> = info.fields().iter().map(FieldInfo::name).collect();
    assert_eq!(names, [Some("c"), Some("s"), Some("i")]);

    let indices: Vec<_> = info.fields().iter().map(FieldInfo::index).collect();
    assert_eq!(indices, [0, 1, 2]);

    assert_eq!(info.field_at(0).unwrap().offset(), offset_of!(A, c));
    assert_eq!(info.field_at(1).unwrap().offset(), offset_of!(A, s));
    assert_eq!(info.field_at(2).unwrap().offset(), offset_of!(A, i));
    assert!(info.field_at(3).is_none());
}

#[test]
fn repr_c_layout_is_reconstructed() {
    #[derive(Visit)]
    #[repr(C)]
    #[allow(dead_code)]
    struct Packet {
        tag: u8,
        len: u32,
        crc: u16,
    }

    // Deriving already cross-checked the layout during const evaluation;
    // the assertions below only restate the expectation.
    let info = Packet::struct_info();
    assert!(info.repr().is_c());
    assert_eq!(info.field_at(1).unwrap().offset(), 4);
    assert_eq!(info.size(), 12);

    let mut cursor = LayoutCursor::new();
    assert_eq!(cursor.claim(1, 1), offset_of!(Packet, tag));
    assert_eq!(cursor.claim(4, 4), offset_of!(Packet, len));
    assert_eq!(cursor.claim(2, 2), offset_of!(Packet, crc));
    assert_eq!(cursor.finish(align_of::<Packet>()), size_of::<Packet>());
}

#[test]
fn tuple_struct_traverses_positionally() {
    #[derive(Visit)]
    struct Pair(i32, String);

    let pair = Pair(1, "one".to_owned());

    let info = Pair::struct_info();
    assert_eq!(info.field_len(), 2);
    assert_eq!(info.field_at(0).unwrap().name(), None);
    assert_eq!(info.field_at(0).unwrap().offset(), offset_of!(Pair, 0));
    assert!(info.field_at(1).unwrap().type_is::<String>());

    struct Count(usize);

    impl Visitor for Count {
        fn visit<F: Any>(&mut self, _value: &F, info: &'static FieldInfo) {
            assert_eq!(info.index(), self.0);
            self.0 += 1;
        }
    }

    let mut count = Count(0);
    visit_fields(&pair, &mut count);
    assert_eq!(count.0, 2);

    let erased: &dyn Fields = &pair;
    assert_eq!(erased.field_at_as::<i32>(0), Some(&1));
    assert_eq!(erased.field_at_as::<String>(1).map(String::as_str), Some("one"));
}

#[test]
fn generic_struct_traverses_like_a_monomorphic_one() {
    #[derive(Visit)]
    struct Wrap<T> {
        inner: T,
        count: u32,
    }

    let wrap = Wrap {
        inner: "x".to_owned(),
        count: 3,
    };

    let info = Wrap::<String>::struct_info();
    assert_eq!(info.field_len(), 2);
    assert!(info.field_at(0).unwrap().type_is::<String>());
    assert!(info.field_at(1).unwrap().type_is::<u32>());

    struct Observed(Vec<&'static str>);

    impl Visitor for Observed {
        fn visit<F: Any>(&mut self, _value: &F, info: &'static FieldInfo) {
            self.0.push(info.name().unwrap());
        }
    }

    let mut observed = Observed(Vec::new());
    visit_fields(&wrap, &mut observed);
    assert_eq!(observed.0, ["inner", "count"]);

    // Const generics monomorphize the same way.
    #[derive(Visit)]
    struct Buf<const N: usize> {
        data: [u8; N],
    }

    let buf = Buf { data: [7u8; 4] };
    assert!(Buf::<4>::struct_info().field_at(0).unwrap().type_is::<[u8; 4]>());
    assert_eq!(Buf::<4>::struct_info().field_at(0).unwrap().size(), 4);

    let erased: &dyn Fields = &buf;
    assert_eq!(erased.field_at_as::<[u8; 4]>(0), Some(&[7u8; 4]));
}

#[test]
fn nested_struct_is_a_single_member() {
    #[derive(Visit)]
    struct Inner {
        u: Option<i32>,
    }

    #[derive(Visit)]
    struct Outer {
        d: f64,
        inner: Inner,
    }

    let outer = Outer {
        d: 1.5,
        inner: Inner { u: Some(9) },
    };

    struct Probe {
        visits: usize,
        seen_inner: bool,
    }

    impl Visitor for Probe {
        fn visit<F: Any>(&mut self, value: &F, _info: &'static FieldInfo) {
            self.visits += 1;
            if let Some(inner) = (value as &dyn Any).downcast_ref::<Inner>() {
                assert_eq!(inner.u, Some(9));
                self.seen_inner = true;
            }
        }
    }

    let mut probe = Probe {
        visits: 0,
        seen_inner: false,
    };
    visit_fields(&outer, &mut probe);

    assert_eq!(probe.visits, 2);
    assert!(probe.seen_inner);
}

#[test]
fn erased_positional_access() {
    #[derive(Visit)]
    struct Foo {
        a: i32,
        b: bool,
    }

    let mut foo = Foo { a: 10, b: true };
    let erased: &mut dyn Fields = &mut foo;

    assert_eq!(erased.field_len(), 2);
    assert_eq!(erased.field_at_as::<i32>(0), Some(&10));
    assert_eq!(erased.field_at_as::<bool>(1), Some(&true));
    assert!(erased.field_at(2).is_none());
    assert!(erased.field_at_as::<f64>(0).is_none());

    *erased.field_at_mut_as::<i32>(0).unwrap() = 31;

    let mut iter = erased.fields();
    assert_eq!(iter.len(), 2);
    assert!(iter.next().unwrap().is::<i32>());
    assert!(iter.next().unwrap().is::<bool>());
    assert!(iter.next().is_none());

    assert_eq!(foo.a, 31);
}
