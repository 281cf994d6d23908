/// Implemented by projections that fold engine events into their own view state.
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}
