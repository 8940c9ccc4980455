mod box_box_manifold;
mod hybrid_general_agreement;
mod trimesh_contacts;
