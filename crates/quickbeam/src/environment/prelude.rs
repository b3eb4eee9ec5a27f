//! Standard prelude with the primitive library

use super::Environment;
use crate::builtins::{io, list, numeric, predicate};
use crate::value::{Arity, BuiltinFn};

impl Environment {
    /// Create an environment with every primitive registered.
    pub fn with_prelude() -> Self {
        let mut env = Self::new();
        env.load_prelude();
        env
    }

    /// Create a primed environment with a custom call depth limit.
    pub fn with_prelude_and_max_call_depth(max_depth: usize) -> Self {
        let mut env = Self::with_max_call_depth(max_depth);
        env.load_prelude();
        env
    }

    /// Load the primitive library into this environment.
    pub fn load_prelude(&mut self) {
        // Lists
        self.define_builtin(BuiltinFn::new("car", Arity::Exact(1), list::car));
        self.define_builtin(BuiltinFn::new("cdr", Arity::Exact(1), list::cdr));
        self.define_builtin(BuiltinFn::new("cons", Arity::Exact(2), list::cons));
        self.define_builtin(BuiltinFn::new("list", Arity::AtLeast(0), list::list));
        self.define_builtin(BuiltinFn::new("elem", Arity::Exact(2), list::elem));
        self.define_builtin(BuiltinFn::new("lambda", Arity::AtLeast(1), list::lambda));

        // Equality and type predicates
        self.define_builtin(BuiltinFn::new("eq", Arity::Exact(2), predicate::eq));
        self.define_builtin(BuiltinFn::new("equal", Arity::Exact(2), predicate::equal));
        self.define_builtin(BuiltinFn::new("atom", Arity::Exact(1), predicate::atom));
        self.define_builtin(BuiltinFn::new("null", Arity::Exact(1), predicate::null));
        self.define_builtin(BuiltinFn::new("listp", Arity::Exact(1), predicate::listp));
        self.define_builtin(BuiltinFn::new("symbolp", Arity::Exact(1), predicate::symbolp));
        // No separate string kind: stringp answers the same question
        self.define_builtin(BuiltinFn::new("stringp", Arity::Exact(1), predicate::symbolp));
        self.define_builtin(BuiltinFn::new("numberp", Arity::Exact(1), predicate::numberp));
        self.define_builtin(BuiltinFn::new("zerop", Arity::Exact(1), predicate::zerop));

        // Arithmetic
        self.define_builtin(BuiltinFn::new("+", Arity::AtLeast(0), numeric::add));
        self.define_builtin(BuiltinFn::new("-", Arity::AtLeast(1), numeric::sub));
        self.define_builtin(BuiltinFn::new("*", Arity::AtLeast(0), numeric::mul));
        self.define_builtin(BuiltinFn::new("/", Arity::AtLeast(2), numeric::div));
        self.define_builtin(BuiltinFn::new("<", Arity::Exact(2), numeric::lt));
        self.define_builtin(BuiltinFn::new(">", Arity::Exact(2), numeric::gt));
        self.define_builtin(BuiltinFn::new("=", Arity::Exact(2), numeric::num_eq));
        self.define_builtin(BuiltinFn::new("1+", Arity::Exact(1), numeric::inc));
        self.define_builtin(BuiltinFn::new("1-", Arity::Exact(1), numeric::dec));
        self.define_builtin(BuiltinFn::new("mod", Arity::Exact(2), numeric::modulo));
        self.define_builtin(BuiltinFn::new("floor", Arity::Range(1, 2), numeric::floor));

        // Output
        self.define_builtin(BuiltinFn::new("print", Arity::Exact(1), io::print));
    }
}
