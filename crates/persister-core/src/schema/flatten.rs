use super::{db::FlatColumn, MemberDescriptor, MemberKind};

/// Flattens a member sequence into its ordered columns.
///
/// Pre-order walk in declaration order. Nested members reuse the already flattened columns
/// of their target, renamed `member_column`; list members repeat them once per element,
/// renamed `member_index_column`. The row encoder and decoder walk members in this exact
/// order.
pub(super) fn flatten(members: &[MemberDescriptor]) -> Vec<FlatColumn> {
    let mut columns = Vec::with_capacity(members.iter().map(MemberDescriptor::width).sum());

    for member in members {
        match &member.kind {
            MemberKind::Primitive(primitive) => columns.push(FlatColumn {
                name: member.name.clone(),
                ty: primitive.ty,
                storage_ty: primitive.storage_ty,
            }),
            MemberKind::Nested(target) => {
                columns.extend(prefixed(target.columns(), &member.name));
            }
            MemberKind::NestedList { target, size } => {
                for index in 0..*size {
                    let prefix = format!("{}_{index}", member.name);
                    columns.extend(prefixed(target.columns(), &prefix));
                }
            }
        }
    }

    columns
}

fn prefixed<'a>(
    columns: &'a [FlatColumn],
    prefix: &'a str,
) -> impl Iterator<Item = FlatColumn> + 'a {
    columns.iter().map(move |column| FlatColumn {
        name: format!("{prefix}_{}", column.name),
        ..column.clone()
    })
}
