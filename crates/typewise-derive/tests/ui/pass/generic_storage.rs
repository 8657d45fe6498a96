use typewise::prelude::*;

pub trait Storage {
    type Item;
    type Slots<'a>
    where
        Self: 'a;
    type Window<U: Copy, const N: usize>;
}

#[derive(Reflect)]
#[reflect(
    methods(get, clear),
    consts(SLOTS),
    types(Storage::Item),
    template = "Storage::Slots<'a> where Self: 'a",
    template = "Storage::Window<U: Copy, const N: usize>"
)]
pub struct Ring<T: Clone, const CAP: usize>
where
    T: Default,
{
    slots: [T; CAP],
    head: usize,
}

impl<T: Clone + Default, const CAP: usize> Ring<T, CAP> {
    pub const SLOTS: usize = CAP;

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get((self.head + index) % CAP)
    }

    pub fn clear(&mut self) {
        self.slots = std::array::from_fn(|_| T::default());
        self.head = 0;
    }
}

impl<T: Clone + Default, const CAP: usize> Storage for Ring<T, CAP> {
    type Item = T;
    type Slots<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type Window<U: Copy, const N: usize> = [U; N];
}

has_method!(HasGet, get);
has_const!(HasSlots, SLOTS);
has_type!(HasItem, Item);
has_template!(HasWindow, Window<type, const>);
has_field!(HasHead, head);

fn main() {
    assert!(HasGet::<Ring<u8, 4>>::VALUE);
    assert!(HasSlots::<Ring<u8, 4>>::VALUE);
    assert!(HasItem::<Ring<u8, 4>>::VALUE);
    assert!(HasWindow::<Ring<u8, 4>>::VALUE);
    assert!(HasHead::<Ring<u8, 4>>::VALUE);

    let mut ring = Ring::<u8, 4> { slots: [1, 2, 3, 4], head: 1 };
    assert_eq!(ring.get(0), Some(&2));
    ring.clear();
    assert_eq!(ring.get(0), Some(&0));
}
