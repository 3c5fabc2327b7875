use crate::error::{Result, ToolError};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Concatenate documents in order into a single document.
///
/// Each input keeps its own page tree; the trees are hung under one new root
/// `Pages` node so attributes inherited within one input (MediaBox, Rotate,
/// Resources) do not spill over onto pages of another.
pub fn merge_documents(documents: Vec<Document>) -> Result<Document> {
    let mut documents = documents.into_iter();
    let mut merged = documents.next().ok_or(ToolError::NoFilesSelected)?;

    let mut subtrees = vec![(pages_root(&merged)?, merged.get_pages().len())];

    for mut doc in documents {
        doc.renumber_objects_with(merged.max_id + 1);
        merged.max_id = doc.max_id;

        subtrees.push((pages_root(&doc)?, doc.get_pages().len()));
        merged.objects.extend(doc.objects);
    }

    let total: usize = subtrees.iter().map(|(_, count)| count).sum();
    let root_id = merged.new_object_id();

    for (subtree_id, _) in &subtrees {
        merged
            .get_dictionary_mut(*subtree_id)?
            .set("Parent", Object::Reference(root_id));
    }

    let kids: Vec<Object> = subtrees
        .iter()
        .map(|(id, _)| Object::Reference(*id))
        .collect();
    let root = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(total as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    merged.objects.insert(root_id, Object::Dictionary(root));
    merged.catalog_mut()?.set("Pages", Object::Reference(root_id));

    // Drops the catalogs of every input but the first
    merged.prune_objects();

    Ok(merged)
}

fn pages_root(doc: &Document) -> Result<ObjectId> {
    Ok(doc.catalog()?.get(b"Pages")?.as_reference()?)
}
