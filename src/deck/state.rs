#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SwipeState {
    Idle,       // Card at rest (or springing back), accepting input
    Dragging,   // Pointer captured, offset follows the pointer
    Committing, // Exit animation in flight, input ignored
}
