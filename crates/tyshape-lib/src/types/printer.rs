//! Go-like surface syntax for types, used in diagnostics and traces.

use std::fmt;

use tyshape_core::{Colors, Interner};

use super::context::TypeContext;
use super::shape::{ChanDir, TypeId, TypeShape};

/// Renders types of one context using names from one interner.
#[derive(Clone, Copy)]
pub struct TypePrinter<'a> {
    ctx: &'a TypeContext,
    interner: &'a Interner,
    colors: Colors,
}

impl<'a> TypePrinter<'a> {
    pub fn new(ctx: &'a TypeContext, interner: &'a Interner) -> Self {
        Self {
            ctx,
            interner,
            colors: Colors::OFF,
        }
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Display adapter for a single type.
    pub fn display(self, id: TypeId) -> DisplayType<'a> {
        DisplayType { printer: self, id }
    }

    pub fn render(self, id: TypeId) -> String {
        self.display(id).to_string()
    }

    fn name(&self, sym: tyshape_core::Symbol) -> &'a str {
        self.interner.try_resolve(sym).unwrap_or("?")
    }

    fn write_type(&self, w: &mut impl fmt::Write, id: TypeId) -> fmt::Result {
        let c = &self.colors;
        let Some(shape) = self.ctx.get_type(id) else {
            return w.write_str("?");
        };

        match shape {
            TypeShape::Invalid => write!(w, "{}invalid type{}", c.dim, c.reset),
            TypeShape::Basic(kind) => write!(w, "{}{}{}", c.blue, kind.name(), c.reset),
            TypeShape::Named(named) => {
                let name = self.name(self.ctx.named_name(*named));
                write!(w, "{}{}{}", c.blue, name, c.reset)
            }
            TypeShape::Param(param) => {
                let name = self.name(self.ctx.param_name(*param));
                write!(w, "{}{}{}", c.blue, name, c.reset)
            }
            TypeShape::Chan { elem, dir } => {
                let prefix = match dir {
                    ChanDir::SendRecv => "chan ",
                    ChanDir::SendOnly => "chan<- ",
                    ChanDir::RecvOnly => "<-chan ",
                };
                w.write_str(prefix)?;
                // `chan (<-chan T)` would otherwise read as `chan<- chan T`
                let parens = *dir == ChanDir::SendRecv
                    && matches!(
                        self.ctx.get_type(*elem),
                        Some(TypeShape::Chan {
                            dir: ChanDir::RecvOnly,
                            ..
                        })
                    );
                if parens {
                    w.write_char('(')?;
                }
                self.write_type(w, *elem)?;
                if parens {
                    w.write_char(')')?;
                }
                Ok(())
            }
            TypeShape::Slice(elem) => {
                w.write_str("[]")?;
                self.write_type(w, *elem)
            }
            TypeShape::Array { len, elem } => {
                write!(w, "[{len}]")?;
                self.write_type(w, *elem)
            }
            TypeShape::Pointer(elem) => {
                w.write_char('*')?;
                self.write_type(w, *elem)
            }
            TypeShape::Map { key, value } => {
                w.write_str("map[")?;
                self.write_type(w, *key)?;
                w.write_char(']')?;
                self.write_type(w, *value)
            }
            TypeShape::Struct(fields) => {
                w.write_str("struct{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        w.write_str("; ")?;
                    }
                    write!(w, "{} ", self.name(field.name))?;
                    self.write_type(w, field.ty)?;
                }
                w.write_char('}')
            }
            TypeShape::Func {
                params,
                results,
                variadic,
            } => {
                w.write_str("func(")?;
                for (i, &param) in params.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    if *variadic && i + 1 == params.len() {
                        w.write_str("...")?;
                        // The variadic parameter is stored as its slice type
                        match self.ctx.get_type(param) {
                            Some(TypeShape::Slice(elem)) => self.write_type(w, *elem)?,
                            _ => self.write_type(w, param)?,
                        }
                    } else {
                        self.write_type(w, param)?;
                    }
                }
                w.write_char(')')?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] => {
                        w.write_char(' ')?;
                        self.write_type(w, *single)
                    }
                    many => {
                        w.write_str(" (")?;
                        for (i, &result) in many.iter().enumerate() {
                            if i > 0 {
                                w.write_str(", ")?;
                            }
                            self.write_type(w, result)?;
                        }
                        w.write_char(')')
                    }
                }
            }
        }
    }
}

/// Result of [`TypePrinter::display`].
pub struct DisplayType<'a> {
    printer: TypePrinter<'a>,
    id: TypeId,
}

impl fmt::Display for DisplayType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.write_type(f, self.id)
    }
}
