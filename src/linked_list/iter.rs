use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::list::SList;
use super::node::SNode;
use super::traits::{Link, NodeWithData};

/// An iterator over the nodes of a list.
pub struct Nodes<'a, P> {
    current: Option<NonNull<SNode<P>>>,
    _list: PhantomData<&'a SNode<P>>,
}

impl<'a, P> Iterator for Nodes<'a, P> {
    type Item = &'a SNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // SAFETY: the list is borrowed for 'a, so no node can be freed or
            // relinked while the iterator is alive.
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            node
        })
    }
}

impl<P> FusedIterator for Nodes<'_, P> {}

/// An iterator over the payloads of a list.
pub struct Iter<'a, P> {
    nodes: Nodes<'a, P>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.data())
    }
}

impl<P> FusedIterator for Iter<'_, P> {}

/// An iterator over mutable references to the payloads of a list.
pub struct IterMut<'a, P> {
    current: Option<NonNull<SNode<P>>>,
    _list: PhantomData<&'a mut SNode<P>>,
}

impl<'a, P> Iterator for IterMut<'a, P> {
    type Item = &'a mut P;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // SAFETY: the list is mutably borrowed for 'a and every node is
            // yielded at most once.
            let node = unsafe { &mut *current.as_ptr() };
            self.current = node.next();
            node.data_mut()
        })
    }
}

impl<P> FusedIterator for IterMut<'_, P> {}

/// An owning iterator over the payloads of a list.
pub struct IntoIter<P> {
    list: SList<P>,
}

impl<P> Iterator for IntoIter<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        self.list.pop_front()
    }
}

impl<P> FusedIterator for IntoIter<P> {}

impl<P> SList<P> {
    /// Iterate over the nodes, head to tail.
    pub fn nodes(&self) -> Nodes<'_, P> {
        Nodes {
            current: self.first(),
            _list: PhantomData,
        }
    }

    /// Iterate over the payloads, head to tail.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter { nodes: self.nodes() }
    }

    /// Iterate over mutable references to the payloads, head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, P> {
        IterMut {
            current: self.first(),
            _list: PhantomData,
        }
    }

    /// Call `trace_func(index, context, payload)` for every node, head to tail.
    ///
    /// The list is borrowed for the whole traversal, so the callback cannot
    /// modify it.
    pub fn trace<C, F>(&self, context: &mut C, mut trace_func: F)
    where
        F: FnMut(usize, &mut C, &P),
    {
        for (index, payload) in self.iter().enumerate() {
            trace_func(index, context, payload);
        }
    }

    /// Call `work_func(index, payload, context)` for every node, head to tail.
    ///
    /// Unlike [`trace`](Self::trace) the callback may update the payload
    /// handle in place; the chain itself stays out of its reach.
    pub fn work<C, F>(&mut self, context: &mut C, mut work_func: F)
    where
        F: FnMut(usize, &mut P, &mut C),
    {
        for (index, payload) in self.iter_mut().enumerate() {
            work_func(index, payload, context);
        }
    }
}

impl<P> IntoIterator for SList<P> {
    type Item = P;
    type IntoIter = IntoIter<P>;

    fn into_iter(self) -> IntoIter<P> {
        IntoIter { list: self }
    }
}

impl<'a, P> IntoIterator for &'a SList<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Iter<'a, P> {
        self.iter()
    }
}

impl<'a, P> IntoIterator for &'a mut SList<P> {
    type Item = &'a mut P;
    type IntoIter = IterMut<'a, P>;

    fn into_iter(self) -> IterMut<'a, P> {
        self.iter_mut()
    }
}
