use typewise::prelude::*;

#[derive(Reflect)]
#[reflect(name = "Direction")]
pub enum Heading {
    North,
    #[reflect(rename = "Down")]
    South,
    #[reflect(skip)]
    Unknown,
}

#[derive(Reflect)]
pub struct Span(pub u32, #[reflect(skip)] pub u32);

has_member!(HasNorth, North);
has_member!(HasDown, Down);
has_member!(HasUnknown, Unknown);
has_field!(HasStart, 0);
has_field!(HasEnd, 1);

fn main() {
    assert_eq!(<Heading as Reflect>::NAME, "Direction");
    assert!(HasNorth::<Heading>::VALUE);
    assert!(HasDown::<Heading>::VALUE);
    assert!(!HasUnknown::<Heading>::VALUE);
    assert!(HasStart::<Span>::VALUE);
    assert!(!HasEnd::<Span>::VALUE);
    let _ = (Heading::South, Heading::Unknown, Span(0, 1).1);
}
