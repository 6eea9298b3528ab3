use super::Sink;
use crate::runner::Context;
use std::cmp::Ordering;

/// Evaluation barrier that buffers every element, then replays them sorted.
///
/// While buffering, `done` is always `false`: a sort must see all of its input.
/// On `end` the buffer is stably sorted with `less` and fed into the downstream
/// as a self-contained sub-evaluation (`begin`, `accept` while not done, `end`).
/// The barrier never forwards its own `begin`/`end`.
pub struct SortBarrier<'a, 'c, T, L> {
    downstream: &'a mut dyn Sink<T>,
    less: L,
    buffer: Vec<T>,
    ctx: &'c Context<'c>,
}

impl<'a, 'c, T, L> SortBarrier<'a, 'c, T, L>
where
    L: Fn(&T, &T) -> bool,
{
    pub fn new(downstream: &'a mut dyn Sink<T>, less: L, ctx: &'c Context<'c>) -> Self {
        Self {
            downstream,
            less,
            buffer: Vec::new(),
            ctx,
        }
    }
}

impl<T, L> Sink<T> for SortBarrier<'_, '_, T, L>
where
    L: Fn(&T, &T) -> bool,
{
    fn begin(&mut self) {
        self.buffer = Vec::with_capacity(self.ctx.options().sort_buffer_capacity());
    }

    fn accept(&mut self, item: T) {
        self.buffer.push(item);
    }

    fn end(&mut self) {
        let less = &self.less;
        let mut buffer = std::mem::take(&mut self.buffer);
        // `sort_by` is stable; ties keep arrival order.
        buffer.sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        tracing::trace!(buffered = buffer.len(), "sort barrier replaying");
        self.ctx.record_sort_flush();

        let downstream = &mut *self.downstream;
        downstream.begin();
        for item in buffer {
            if downstream.done() {
                break;
            }
            downstream.accept(item);
        }
        downstream.end();
    }
}
