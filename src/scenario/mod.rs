pub mod datavolume;
