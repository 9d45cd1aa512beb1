use crate::maths::vector::Vector3;

/// Location of a map feature, in whole map units.
pub type Position = Vector3<i64>;

/// A node of the future map graph. Carries only its position until edges land.
#[derive(Copy, Clone, Debug)]
pub struct Vertex
{
    position: Position,
}

impl Vertex
{
    pub fn new(position: Position) -> Self { Vertex { position } }

    pub fn position(&self) -> Position { self.position }
}
