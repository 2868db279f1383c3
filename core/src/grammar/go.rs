//! Child layout of the Go syntax tree (`go/ast`).
//!
//! Kinds are tagged by their `go/ast` type name without the package prefix
//! (`IfStmt`), and annotated in paths with the pointer type the Go front end
//! reports at runtime (`*ast.IfStmt`). Slot order follows `go/ast.Walk`.

use once_cell::sync::Lazy;

use super::{Arity, Grammar, KindDescriptor, SlotDescriptor, SlotType};

use Arity::{Keyed, List, Optional, Required};
use SlotType::{Concrete, Interface};

const fn one(name: &'static str, ty: SlotType) -> SlotDescriptor {
    SlotDescriptor::new(name, Required, ty)
}

const fn opt(name: &'static str, ty: SlotType) -> SlotDescriptor {
    SlotDescriptor::new(name, Optional, ty)
}

const fn list(name: &'static str, ty: SlotType) -> SlotDescriptor {
    SlotDescriptor::new(name, List, ty)
}

const fn keyed(name: &'static str, ty: SlotType) -> SlotDescriptor {
    SlotDescriptor::new(name, Keyed, ty)
}

macro_rules! kind {
    ($kind:literal $(, $slot:expr)* $(,)?) => {
        KindDescriptor {
            kind: $kind,
            type_name: concat!("*ast.", $kind),
            slots: &[$($slot),*],
        }
    };
}

/// Every `go/ast` node kind with its child slots.
///
/// `Expr`, `Stmt`, `Decl` and `Spec` fields are [`Interface`]; fields typed
/// as a pointer to one concrete node type are [`Concrete`].
pub static GO_KINDS: &[KindDescriptor] = &[
    // Comments
    kind!("Comment"),
    kind!("CommentGroup", list("List", Concrete)),
    // Fields
    kind!(
        "Field",
        opt("Doc", Concrete),
        list("Names", Concrete),
        one("Type", Interface),
        opt("Tag", Concrete),
        opt("Comment", Concrete),
    ),
    kind!("FieldList", list("List", Concrete)),
    // Expressions
    kind!("BadExpr"),
    kind!("Ident"),
    kind!("BasicLit"),
    kind!("Ellipsis", opt("Elt", Interface)),
    kind!("FuncLit", one("Type", Concrete), one("Body", Concrete)),
    kind!("CompositeLit", opt("Type", Interface), list("Elts", Interface)),
    kind!("ParenExpr", one("X", Interface)),
    kind!("SelectorExpr", one("X", Interface), one("Sel", Concrete)),
    kind!("IndexExpr", one("X", Interface), one("Index", Interface)),
    kind!("IndexListExpr", one("X", Interface), list("Indices", Interface)),
    kind!(
        "SliceExpr",
        one("X", Interface),
        opt("Low", Interface),
        opt("High", Interface),
        opt("Max", Interface),
    ),
    kind!("TypeAssertExpr", one("X", Interface), opt("Type", Interface)),
    kind!("CallExpr", one("Fun", Interface), list("Args", Interface)),
    kind!("StarExpr", one("X", Interface)),
    kind!("UnaryExpr", one("X", Interface)),
    kind!("BinaryExpr", one("X", Interface), one("Y", Interface)),
    kind!("KeyValueExpr", one("Key", Interface), one("Value", Interface)),
    // Types
    kind!("ArrayType", opt("Len", Interface), one("Elt", Interface)),
    kind!("StructType", one("Fields", Concrete)),
    kind!(
        "FuncType",
        opt("TypeParams", Concrete),
        opt("Params", Concrete),
        opt("Results", Concrete),
    ),
    kind!("InterfaceType", one("Methods", Concrete)),
    kind!("MapType", one("Key", Interface), one("Value", Interface)),
    kind!("ChanType", one("Value", Interface)),
    // Statements
    kind!("BadStmt"),
    kind!("DeclStmt", one("Decl", Interface)),
    kind!("EmptyStmt"),
    kind!("LabeledStmt", one("Label", Concrete), one("Stmt", Interface)),
    kind!("ExprStmt", one("X", Interface)),
    kind!("SendStmt", one("Chan", Interface), one("Value", Interface)),
    kind!("IncDecStmt", one("X", Interface)),
    kind!("AssignStmt", list("Lhs", Interface), list("Rhs", Interface)),
    kind!("GoStmt", one("Call", Concrete)),
    kind!("DeferStmt", one("Call", Concrete)),
    kind!("ReturnStmt", list("Results", Interface)),
    kind!("BranchStmt", opt("Label", Concrete)),
    kind!("BlockStmt", list("List", Interface)),
    kind!(
        "IfStmt",
        opt("Init", Interface),
        one("Cond", Interface),
        one("Body", Concrete),
        opt("Else", Interface),
    ),
    kind!("CaseClause", list("List", Interface), list("Body", Interface)),
    kind!(
        "SwitchStmt",
        opt("Init", Interface),
        opt("Tag", Interface),
        one("Body", Concrete),
    ),
    kind!(
        "TypeSwitchStmt",
        opt("Init", Interface),
        one("Assign", Interface),
        one("Body", Concrete),
    ),
    kind!("CommClause", opt("Comm", Interface), list("Body", Interface)),
    kind!("SelectStmt", one("Body", Concrete)),
    kind!(
        "ForStmt",
        opt("Init", Interface),
        opt("Cond", Interface),
        opt("Post", Interface),
        one("Body", Concrete),
    ),
    kind!(
        "RangeStmt",
        opt("Key", Interface),
        opt("Value", Interface),
        one("X", Interface),
        one("Body", Concrete),
    ),
    // Specs and declarations
    kind!(
        "ImportSpec",
        opt("Doc", Concrete),
        opt("Name", Concrete),
        one("Path", Concrete),
        opt("Comment", Concrete),
    ),
    kind!(
        "ValueSpec",
        opt("Doc", Concrete),
        list("Names", Concrete),
        opt("Type", Interface),
        list("Values", Interface),
        opt("Comment", Concrete),
    ),
    kind!(
        "TypeSpec",
        opt("Doc", Concrete),
        one("Name", Concrete),
        opt("TypeParams", Concrete),
        one("Type", Interface),
        opt("Comment", Concrete),
    ),
    kind!("BadDecl"),
    kind!("GenDecl", opt("Doc", Concrete), list("Specs", Interface)),
    kind!(
        "FuncDecl",
        opt("Doc", Concrete),
        opt("Recv", Concrete),
        one("Name", Concrete),
        one("Type", Concrete),
        opt("Body", Concrete),
    ),
    // Files and packages
    kind!(
        "File",
        opt("Doc", Concrete),
        one("Name", Concrete),
        list("Decls", Interface),
    ),
    kind!("Package", keyed("Files", Concrete)),
];

static GO: Lazy<Grammar> =
    Lazy::new(|| Grammar::new(GO_KINDS).unwrap_or_else(|e| panic!("invalid Go grammar: {e}")));

/// The Go grammar, indexed on first use.
pub fn go() -> &'static Grammar {
    &GO
}
