//! The six member generators of a bean class.
//!
//! Every generator is a pure function of the ordered fields and the two type
//! names, and returns Java text indented for the class body. Field order is
//! kept verbatim in every fragment.

use crate::schema::{FieldSchema, RecordSchema};

/// Indentation of class members.
const MEMBER: &str = "  ";

/// Indentation of statements inside a member.
const BODY: &str = "    ";

/// Names every generator needs besides the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    /// Simple name of the generated bean.
    pub bean: String,

    /// Qualified name of the host record.
    pub record: String,
}

impl TypeNames {
    pub fn of(schema: &RecordSchema) -> Self {
        Self {
            bean: schema.bean_name(),
            record: schema.qualified_name.clone(),
        }
    }
}

/// Generated text of all six members of one bean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    /// Bean the fragments were generated for.
    pub bean_name: String,

    pub from_record: String,
    pub constructors: String,
    pub accessors: String,
    pub equality: String,
    pub to_record: String,
    pub to_string: String,
}

impl Fragments {
    /// Run every generator for `schema`.
    pub fn generate(schema: &RecordSchema) -> Self {
        let names = TypeNames::of(schema);
        let fields = schema.fields.as_slice();

        Self {
            from_record: from_record(fields, &names),
            constructors: constructors(fields, &names),
            accessors: accessors(fields, &names),
            equality: equality(fields, &names),
            to_record: to_record(fields, &names),
            to_string: to_string(fields, &names),
            bean_name: names.bean,
        }
    }

    /// Members in class-body order; accessors carry the field storage and come last.
    pub fn members(&self) -> [&str; 6] {
        [
            &self.from_record,
            &self.constructors,
            &self.equality,
            &self.to_record,
            &self.to_string,
            &self.accessors,
        ]
    }
}

/// Static `fromRecord` factory.
///
/// Nested fields delegate to the nested bean's own `fromRecord`.
pub fn from_record(fields: &[FieldSchema], names: &TypeNames) -> String {
    let values = fields
        .iter()
        .map(|field| {
            let value = format!("record.{}()", field.name);
            if field.is_nested {
                format!(
                    "{value} == null ? null : {}.fromRecord({value})",
                    field.beanerated_type()
                )
            } else {
                value
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut code = String::new();
    code.push_str(&format!(
        "{MEMBER}/** Builds a bean from the given {{@code {}}} record. */\n",
        names.record
    ));
    code.push_str(&format!(
        "{MEMBER}public static {} fromRecord({} record) {{\n",
        names.bean, names.record
    ));
    code.push_str(&format!("{BODY}return new {}({values});\n", names.bean));
    code.push_str(&format!("{MEMBER}}}\n"));
    code
}

/// Null constructor plus, when there are fields, the canonical constructor.
pub fn constructors(fields: &[FieldSchema], names: &TypeNames) -> String {
    let mut code = String::new();
    code.push_str(&format!(
        "{MEMBER}/** Creates a bean with every field at its type default. */\n"
    ));
    code.push_str(&format!("{MEMBER}public {}() {{}}\n", names.bean));

    // with no fields the canonical constructor would duplicate the null one
    if fields.is_empty() {
        return code;
    }

    let args = fields
        .iter()
        .map(|f| format!("{} {}", f.beanerated_type(), f.name))
        .collect::<Vec<_>>()
        .join(", ");

    code.push('\n');
    code.push_str(&format!(
        "{MEMBER}/** Creates a bean from field values in declaration order. */\n"
    ));
    code.push_str(&format!("{MEMBER}public {}({args}) {{\n", names.bean));
    for field in fields {
        code.push_str(&format!("{BODY}this.{0} = {0};\n", field.name));
    }
    code.push_str(&format!("{MEMBER}}}\n"));
    code
}

/// Private storage, getter and fluent setter for every field.
pub fn accessors(fields: &[FieldSchema], names: &TypeNames) -> String {
    fields
        .iter()
        .map(|field| field_accessors(field, names))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_accessors(field: &FieldSchema, names: &TypeNames) -> String {
    let ty = field.beanerated_type();
    let name = &field.name;
    let cap = field.cap_name();

    let mut code = String::new();
    code.push_str(&format!("{MEMBER}private {ty} {name};\n\n"));

    code.push_str(&format!(
        "{MEMBER}/** Gets the value of {{@code {name}}}. */\n"
    ));
    code.push_str(&format!("{MEMBER}public {ty} get{cap}() {{\n"));
    code.push_str(&format!("{BODY}return this.{name};\n"));
    code.push_str(&format!("{MEMBER}}}\n\n"));

    code.push_str(&format!(
        "{MEMBER}/** Sets the value of {{@code {name}}}. */\n"
    ));
    code.push_str(&format!(
        "{MEMBER}public {} set{cap}({ty} {name}) {{\n",
        names.bean
    ));
    code.push_str(&format!("{BODY}this.{name} = {name};\n"));
    code.push_str(&format!("{BODY}return this;\n"));
    code.push_str(&format!("{MEMBER}}}\n"));
    code
}

/// `equals` and `hashCode`.
///
/// Fields are compared with `==`: by value for primitives, by reference for
/// everything else. Two beans holding equal but distinct nested beans are
/// therefore not equal.
pub fn equality(fields: &[FieldSchema], names: &TypeNames) -> String {
    let other = format!("other{}", names.bean);

    let mut code = String::new();
    code.push_str(&format!("{MEMBER}@Override\n"));
    code.push_str(&format!("{MEMBER}public boolean equals(Object other) {{\n"));
    code.push_str(&format!("{BODY}return this == other || (\n"));
    code.push_str(&format!("{BODY}  other instanceof {} {other}\n", names.bean));
    for field in fields {
        code.push_str(&format!(
            "{BODY}    && this.{} == {other}.get{}()\n",
            field.name,
            field.cap_name()
        ));
    }
    code.push_str(&format!("{BODY});\n"));
    code.push_str(&format!("{MEMBER}}}\n\n"));

    let hashed = fields
        .iter()
        .map(|f| format!("this.{}", f.name))
        .collect::<Vec<_>>()
        .join(", ");
    code.push_str(&format!("{MEMBER}@Override\n"));
    code.push_str(&format!("{MEMBER}public int hashCode() {{\n"));
    code.push_str(&format!("{BODY}return Objects.hash({hashed});\n"));
    code.push_str(&format!("{MEMBER}}}\n"));
    code
}

/// `toRecord`, converting nested beans back first.
pub fn to_record(fields: &[FieldSchema], names: &TypeNames) -> String {
    let values = fields
        .iter()
        .map(|field| {
            let value = format!("this.get{}()", field.cap_name());
            if field.is_nested {
                format!("{value} == null ? null : {value}.toRecord()")
            } else {
                value
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut code = String::new();
    code.push_str(&format!(
        "{MEMBER}/** Builds a {{@code {}}} record from this bean. */\n",
        names.record
    ));
    code.push_str(&format!("{MEMBER}public {} toRecord() {{\n", names.record));
    code.push_str(&format!("{BODY}return new {}({values});\n", names.record));
    code.push_str(&format!("{MEMBER}}}\n"));
    code
}

/// `toString` as `Name[field1=value1, field2=value2]`.
pub fn to_string(fields: &[FieldSchema], names: &TypeNames) -> String {
    let mut code = String::new();
    code.push_str(&format!("{MEMBER}@Override\n"));
    code.push_str(&format!("{MEMBER}public String toString() {{\n"));

    if fields.is_empty() {
        code.push_str(&format!("{BODY}return \"{}[]\";\n", names.bean));
    } else {
        code.push_str(&format!("{BODY}return \"{}[\"\n", names.bean));
        let last = fields.len() - 1;
        for (i, field) in fields.iter().enumerate() {
            let separator = if i < last { " + \", \"" } else { "" };
            code.push_str(&format!(
                "{BODY}  + \"{0}=\" + this.{0}{separator}\n",
                field.name
            ));
        }
        code.push_str(&format!("{BODY}  + \"]\";\n"));
    }

    code.push_str(&format!("{MEMBER}}}\n"));
    code
}
