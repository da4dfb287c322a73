//! Typed paths from a parent state to an embedded child slice.

use std::fmt;
use std::sync::Arc;

use super::state::Immutable;

type View<P, C> = Arc<dyn Fn(&P) -> Immutable<C> + Send + Sync>;
type Replace<P, C> = Arc<dyn Fn(&P, Immutable<C>) -> P + Send + Sync>;

/// Path from a parent state `P` to the `Immutable<C>` it embeds.
///
/// `set` rebuilds only the nodes along the path; every sibling is carried
/// over by reference.
pub struct Lens<P, C> {
    view: View<P, C>,
    replace: Replace<P, C>,
}

impl<P, C> Lens<P, C>
where
    P: Clone + Send + Sync + 'static,
    C: Send + Sync + 'static,
{
    /// Lens onto a single field.
    ///
    /// ```
    /// use marketframe::ui::mvi::{Immutable, Lens};
    ///
    /// #[derive(Clone)]
    /// struct Page { form: Immutable<String> }
    ///
    /// let form: Lens<Page, String> = Lens::field(|p| &p.form, |p| &mut p.form);
    /// let page = Immutable::new(Page { form: Immutable::new("a".into()) });
    /// let next = form.set(&page, Immutable::new("b".into()));
    /// assert_eq!(*form.get(&next), "b");
    /// ```
    pub fn field(
        get: fn(&P) -> &Immutable<C>,
        get_mut: fn(&mut P) -> &mut Immutable<C>,
    ) -> Self {
        Self {
            view: Arc::new(move |parent: &P| get(parent).clone()),
            replace: Arc::new(move |parent: &P, child: Immutable<C>| {
                let mut next = parent.clone();
                *get_mut(&mut next) = child;
                next
            }),
        }
    }

    pub fn get(&self, parent: &P) -> Immutable<C> {
        (self.view)(parent)
    }

    /// Re-embed `child`. Returns `parent` itself when `child` is the slice
    /// already stored there.
    pub fn set(&self, parent: &Immutable<P>, child: Immutable<C>) -> Immutable<P> {
        if Immutable::ptr_eq(&self.get(parent), &child) {
            return parent.clone();
        }
        Immutable::new((self.replace)(&**parent, child))
    }

    pub fn modify(
        &self,
        parent: &Immutable<P>,
        f: impl FnOnce(Immutable<C>) -> Immutable<C>,
    ) -> Immutable<P> {
        let child = self.get(parent);
        self.set(parent, f(child))
    }

    /// Compose with a lens into the child, for deeper nesting.
    pub fn then<D>(&self, inner: Lens<C, D>) -> Lens<P, D>
    where
        C: Clone,
        D: Send + Sync + 'static,
    {
        let outer_view = Arc::clone(&self.view);
        let outer = self.clone();
        let inner_view = inner.clone();
        Lens {
            view: Arc::new(move |parent: &P| inner_view.get(&outer_view(parent))),
            replace: Arc::new(move |parent: &P, leaf: Immutable<D>| {
                let child = outer.get(parent);
                let child = inner.set(&child, leaf);
                (outer.replace)(parent, child)
            }),
        }
    }
}

impl<P, C> Clone for Lens<P, C> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            replace: Arc::clone(&self.replace),
        }
    }
}

impl<P, C> fmt::Debug for Lens<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Form {
        name: Immutable<String>,
        email: Immutable<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Page {
        form: Immutable<Form>,
        sidebar: Immutable<Vec<String>>,
    }

    fn form_lens() -> Lens<Page, Form> {
        Lens::field(|p| &p.form, |p| &mut p.form)
    }

    fn name_lens() -> Lens<Form, String> {
        Lens::field(|f| &f.name, |f| &mut f.name)
    }

    fn page() -> Immutable<Page> {
        Immutable::new(Page {
            form: Immutable::new(Form {
                name: Immutable::new("Acme".into()),
                email: Immutable::new("a@acme.test".into()),
            }),
            sidebar: Immutable::new(vec!["home".into()]),
        })
    }

    #[test]
    fn set_replaces_only_the_path() {
        let before = page();
        let path = form_lens().then(name_lens());
        let after = path.set(&before, Immutable::new("Globex".into()));

        assert_eq!(*path.get(&after), "Globex");
        assert_eq!(*path.get(&before), "Acme");
        assert!(Immutable::ptr_eq(&before.sidebar, &after.sidebar));
        assert!(Immutable::ptr_eq(&before.form.email, &after.form.email));
        assert!(!Immutable::ptr_eq(&before.form, &after.form));
    }

    #[test]
    fn setting_same_slice_keeps_identity() {
        let before = page();
        let lens = form_lens();
        let after = lens.set(&before, lens.get(&before));
        assert!(Immutable::ptr_eq(&before, &after));
    }

    #[test]
    fn modify_applies_to_current_slice() {
        let before = page();
        let after = form_lens().then(name_lens()).modify(&before, |name| {
            Immutable::new(format!("{} Inc", *name))
        });
        assert_eq!(*after.form.name, "Acme Inc");
    }
}
