rosrust::rosmsg_include!(
    blam_slam / AddFactor,
    blam_slam / RemoveFactor,
    pose_graph_visualizer / HighlightEdge
);
