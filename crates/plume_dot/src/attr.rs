//! Decorative attribute vocabularies.
//!
//! Pure-data enumerations for the common Graphviz `shape` and `style`
//! attribute values. Each renders as the lowercase form Graphviz
//! expects; [`crate::Line::shape`] and [`crate::Line::style`] consume
//! them directly.

use plume_enum::enumerated;

enumerated! {
    /// Value of the `style` attribute.
    pub enum Style {
        Dashed => "dashed",
        Dotted => "dotted",
        Solid => "solid",
        Invis => "invis",
        Bold => "bold",
        Tapered => "tapered",
        Filled => "filled",
        Diagonals => "diagonals",
        Rounded => "rounded",
    }
}

enumerated! {
    /// Value of the `shape` attribute (polygon-based node shapes).
    pub enum Shape {
        Box => "box",
        Polygon => "polygon",
        Ellipse => "ellipse",
        Oval => "oval",
        Circle => "circle",
        Point => "point",
        Egg => "egg",
        Triangle => "triangle",
        PlainText => "plaintext",
        Diamond => "diamond",
        Trapezium => "trapezium",
        Parallelogram => "parallelogram",
        House => "house",
        Pentagon => "pentagon",
        Hexagon => "hexagon",
        Septagon => "septagon",
        Octagon => "octagon",
        DoubleCircle => "doublecircle",
        DoubleOctagon => "doubleoctagon",
        TripleOctagon => "tripleoctagon",
        InvTriangle => "invtriangle",
        InvTrapezium => "invtrapezium",
        InvHouse => "invhouse",
        MDiamond => "mdiamond",
        MSquare => "msquare",
        MCircle => "mcircle",
        Rect => "rect",
        Rectangle => "rectangle",
        Square => "square",
        None => "none",
        Note => "note",
        Tab => "tab",
        Folder => "folder",
        Box3d => "box3d",
        Component => "component",
    }
}
